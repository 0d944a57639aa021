//! Error types for task tree construction and queries.

use super::{NodeHandle, TaskId};
use crate::issue::domain::IssueId;
use crate::team::ports::TeamDirectoryError;
use thiserror::Error;

/// Errors returned by the task tree, the identifier allocator and task
/// decorators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskTreeError {
    /// The handle does not address a node in this tree.
    #[error("unknown task node {0}")]
    UnknownNode(NodeHandle),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyName,

    /// Children can only be attached to composite tasks.
    #[error("task node {0} is a leaf and cannot hold children")]
    NotComposite(NodeHandle),

    /// The node already has an id, either as a root, a child or a detached
    /// former child.
    #[error("task node {0} has already been placed in the hierarchy")]
    AlreadyPlaced(NodeHandle),

    /// The parent has not been declared a root or attached yet, so it has
    /// no id to compute child ids from.
    #[error("parent task node {0} has no resolved id")]
    ParentUnresolved(NodeHandle),

    /// The node has not been declared a root or attached yet.
    #[error("task node {0} has not been placed and has no id")]
    Unplaced(NodeHandle),

    /// The node has no parent.
    #[error("task node {0} has no parent")]
    NoParent(NodeHandle),

    /// The child is not among the parent's children.
    #[error("task node {child} is not a child of {parent}")]
    NotAChild {
        /// Composite the child was expected under.
        parent: NodeHandle,
        /// Node that was looked up.
        child: NodeHandle,
    },

    /// The parent already holds as many children as the id scheme allows.
    #[error("task {parent} already has {capacity} children, the allocator capacity is exceeded")]
    ChildCapacityExceeded {
        /// Id of the exhausted parent.
        parent: TaskId,
        /// Configured child capacity.
        capacity: u32,
    },

    /// The root counter cannot advance any further.
    #[error("root task id space is exhausted")]
    RootIdsExhausted,

    /// The child id would not fit in 64 bits.
    #[error("child id space under task {0} is exhausted")]
    IdSpaceExhausted(TaskId),

    /// The issue is not attached to the node.
    #[error("issue {issue} is not attached to task node {node}")]
    UnknownIssue {
        /// Node that was searched.
        node: NodeHandle,
        /// Issue that was looked up.
        issue: IssueId,
    },

    /// The decorator layer carries no meeting metadata.
    #[error("task decorator is not a meeting")]
    NotAMeeting,

    /// Attendee resolution failed against the team directory.
    #[error(transparent)]
    Directory(#[from] TeamDirectoryError),

    /// A traversal line template failed to render.
    #[error("failed to render traversal line: {0}")]
    TemplateRender(String),
}

/// Result type for task tree operations.
pub type TaskTreeResult<T> = Result<T, TaskTreeError>;

//! Task node entity and its construction parameters.

use super::{NodeHandle, ObserverRegistry, TaskId, TaskTreeError, TaskTreeResult};
use crate::issue::domain::Issue;
use crate::team::domain::MemberId;
use chrono::NaiveDate;

/// Parameters for creating a task node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    name: String,
    due_date: Option<NaiveDate>,
    assignee: Option<MemberId>,
}

impl NewTask {
    /// Creates parameters with the required task name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: None,
            assignee: None,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: MemberId) -> Self {
        self.assignee = Some(assignee);
        self
    }
}

/// Leaf or composite shape of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Terminal task without children.
    Leaf,
    /// Task grouping an ordered list of children.
    Composite {
        /// Children in attachment order.
        children: Vec<NodeHandle>,
    },
}

/// Where a node sits in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Created but neither declared a root nor attached. Has no id.
    Unplaced,
    /// Top-level task with an id from the root counter.
    Root,
    /// Attached under a composite.
    Child {
        /// The owning composite.
        parent: NodeHandle,
    },
    /// Formerly a child. Keeps its id and can no longer be re-attached.
    Detached,
}

/// A task in the hierarchy.
#[derive(Debug, Clone)]
pub struct TaskNode {
    handle: NodeHandle,
    id: Option<TaskId>,
    name: String,
    due_date: Option<NaiveDate>,
    assignee: Option<MemberId>,
    placement: Placement,
    kind: TaskKind,
    issues: Vec<Issue>,
    watchers: ObserverRegistry,
}

impl TaskNode {
    pub(super) fn new(handle: NodeHandle, task: NewTask, kind: TaskKind) -> TaskTreeResult<Self> {
        Ok(Self {
            handle,
            id: None,
            name: normalize_name(task.name)?,
            due_date: task.due_date,
            assignee: task.assignee,
            placement: Placement::Unplaced,
            kind,
            issues: Vec::new(),
            watchers: ObserverRegistry::new(),
        })
    }

    /// Returns the arena handle.
    #[must_use]
    pub const fn handle(&self) -> NodeHandle {
        self.handle
    }

    /// Returns the id, once the node has been placed.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<MemberId> {
        self.assignee
    }

    /// Returns the node's placement.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Returns the parent handle for attached children.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeHandle> {
        match self.placement {
            Placement::Child { parent } => Some(parent),
            Placement::Unplaced | Placement::Root | Placement::Detached => None,
        }
    }

    /// Returns `true` for root tasks.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self.placement, Placement::Root)
    }

    /// Returns the leaf or composite shape.
    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Returns `true` for composite tasks.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self.kind, TaskKind::Composite { .. })
    }

    /// Returns the children in attachment order. Leaves have none.
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        match &self.kind {
            TaskKind::Leaf => &[],
            TaskKind::Composite { children } => children,
        }
    }

    /// Returns the issues raised against this task, oldest first.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Returns the task-level watcher registry.
    #[must_use]
    pub const fn watchers(&self) -> &ObserverRegistry {
        &self.watchers
    }

    pub(super) const fn set_id(&mut self, id: TaskId) {
        self.id = Some(id);
    }

    pub(super) const fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    pub(super) fn rename(&mut self, name: String) -> TaskTreeResult<()> {
        self.name = normalize_name(name)?;
        Ok(())
    }

    pub(super) const fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }

    pub(super) const fn set_assignee(&mut self, assignee: Option<MemberId>) {
        self.assignee = assignee;
    }

    pub(super) const fn children_mut(&mut self) -> Option<&mut Vec<NodeHandle>> {
        match &mut self.kind {
            TaskKind::Leaf => None,
            TaskKind::Composite { children } => Some(children),
        }
    }

    pub(super) const fn issues_mut(&mut self) -> &mut Vec<Issue> {
        &mut self.issues
    }

    pub(super) const fn watchers_mut(&mut self) -> &mut ObserverRegistry {
        &mut self.watchers
    }
}

fn normalize_name(raw: String) -> TaskTreeResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskTreeError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

//! Error types for sprint bookkeeping.

use crate::task::domain::{NodeHandle, TaskTreeError};
use thiserror::Error;

/// Errors returned while planning a sprint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SprintError {
    /// Day ordinals run from 1 to the sprint length.
    #[error("day ordinal {0} is outside 1..=14")]
    OrdinalOutOfRange(u8),

    /// The day has already been added.
    #[error("day {0} already exists in the sprint")]
    DuplicateDay(u8),

    /// The day has not been added.
    #[error("day {0} does not exist in the sprint")]
    UnknownDay(u8),

    /// Only root tasks are scheduled on days.
    #[error("task node {0} is not a root task")]
    NotARoot(NodeHandle),

    /// Looking the task up in the tree failed.
    #[error(transparent)]
    Tree(#[from] TaskTreeError),
}

//! Identifier types for the task hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hierarchical task identifier.
///
/// Root tasks receive consecutive values starting at 1. A child receives
/// `parent * 100 + k`, where `k` is its 1-based attachment position, so a
/// child's id nests under its parent's id in base-100 digit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable arena position of a node inside a [`super::TaskTree`].
///
/// Handles exist from the moment a node is created, before the node has a
/// [`TaskId`], and remain valid for the lifetime of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// Creates a handle from a raw arena index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

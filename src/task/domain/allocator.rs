//! Hierarchical identifier allocation.

use super::{TaskId, TaskTreeError, TaskTreeResult};
use crate::config::{ChildCapacityPolicy, MAX_CHILD_CAPACITY, TrackerConfig};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Width of one digit group in a hierarchical id.
const DIGIT_GROUP: u64 = 100;

/// Allocates root and child task identifiers.
///
/// Root ids count up from 1. Child ids are `parent * 100 + k` where `k` is a
/// 1-based counter kept per parent id. Counters only move forward: ids are
/// never reclaimed, even when a child is detached.
///
/// A parent with more than 99 children would produce an id inside a
/// sibling's subtree (`1 * 100 + 100 == 2 * 100 + 0`). Under
/// [`ChildCapacityPolicy::Reject`] such requests fail with
/// [`TaskTreeError::ChildCapacityExceeded`]; under
/// [`ChildCapacityPolicy::Unchecked`] the colliding id is handed out and a
/// warning is logged.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    root_counter: u64,
    child_counters: HashMap<TaskId, u32>,
    capacity: u32,
    policy: ChildCapacityPolicy,
}

impl IdAllocator {
    /// Creates an allocator with the given child capacity and policy.
    ///
    /// The capacity is clamped to `1..=99`.
    #[must_use]
    pub fn new(capacity: u16, policy: ChildCapacityPolicy) -> Self {
        Self {
            root_counter: 0,
            child_counters: HashMap::new(),
            capacity: u32::from(capacity.clamp(1, MAX_CHILD_CAPACITY)),
            policy,
        }
    }

    /// Creates an allocator from tracker configuration.
    #[must_use]
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.child_capacity, config.capacity_policy)
    }

    /// Returns the effective child capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the capacity policy.
    #[must_use]
    pub const fn policy(&self) -> ChildCapacityPolicy {
        self.policy
    }

    /// Allocates the next root id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::RootIdsExhausted`] if the counter would
    /// overflow.
    pub fn allocate_root_id(&mut self) -> TaskTreeResult<TaskId> {
        let next = self
            .root_counter
            .checked_add(1)
            .ok_or(TaskTreeError::RootIdsExhausted)?;
        self.root_counter = next;
        debug!(task_id = next, "allocated root task id");
        Ok(TaskId::new(next))
    }

    /// Allocates the next child id under `parent`.
    ///
    /// The per-parent counter only advances when an id is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::ChildCapacityExceeded`] when the parent is
    /// full and the policy is [`ChildCapacityPolicy::Reject`], or
    /// [`TaskTreeError::IdSpaceExhausted`] if the id does not fit in 64 bits.
    pub fn allocate_child_id(&mut self, parent: TaskId) -> TaskTreeResult<TaskId> {
        let ordinal = self.children_allocated(parent).saturating_add(1);
        if ordinal > self.capacity {
            match self.policy {
                ChildCapacityPolicy::Reject => {
                    return Err(TaskTreeError::ChildCapacityExceeded {
                        parent,
                        capacity: self.capacity,
                    });
                }
                ChildCapacityPolicy::Unchecked => {
                    warn!(
                        parent_id = parent.value(),
                        ordinal, "child id collides with a sibling subtree"
                    );
                }
            }
        }

        let value = parent
            .value()
            .checked_mul(DIGIT_GROUP)
            .and_then(|base| base.checked_add(u64::from(ordinal)))
            .ok_or(TaskTreeError::IdSpaceExhausted(parent))?;
        self.child_counters.insert(parent, ordinal);
        debug!(
            parent_id = parent.value(),
            task_id = value,
            "allocated child task id"
        );
        Ok(TaskId::new(value))
    }

    /// Returns how many child ids have been handed out under `parent`.
    #[must_use]
    pub fn children_allocated(&self, parent: TaskId) -> u32 {
        self.child_counters.get(&parent).copied().unwrap_or_default()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::from_config(&TrackerConfig::default())
    }
}

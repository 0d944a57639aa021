//! Observer that keeps every change it receives.

use crate::issue::{
    domain::{IssueChange, ObserverKey},
    ports::IssueObserver,
};
use std::sync::{Mutex, PoisonError};

/// In-memory [`IssueObserver`] that records notifications in arrival order.
#[derive(Debug)]
pub struct RecordingObserver {
    key: ObserverKey,
    sticky: bool,
    changes: Mutex<Vec<IssueChange>>,
}

impl RecordingObserver {
    /// Creates an observer with a fresh key that unsubscribes on
    /// resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key(ObserverKey::new())
    }

    /// Creates an observer with the given key.
    #[must_use]
    pub const fn with_key(key: ObserverKey) -> Self {
        Self {
            key,
            sticky: false,
            changes: Mutex::new(Vec::new()),
        }
    }

    /// Keeps the observer subscribed when an issue is resolved.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    /// Returns a copy of the received changes.
    #[must_use]
    pub fn changes(&self) -> Vec<IssueChange> {
        self.changes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of received changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueObserver for RecordingObserver {
    fn observer_key(&self) -> ObserverKey {
        self.key
    }

    fn on_issue_changed(&self, change: &IssueChange) {
        self.changes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(change.clone());
    }

    fn unsubscribes_on_resolve(&self) -> bool {
        !self.sticky
    }
}

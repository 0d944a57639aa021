//! Observer port for issue change notifications.

use crate::issue::domain::{IssueChange, ObserverKey};

/// Receiver of issue change notifications.
///
/// Delivery is synchronous and in subscription order. A failing observer
/// must handle its own failure: the issue does not retry.
#[cfg_attr(test, mockall::automock)]
pub trait IssueObserver: Send + Sync {
    /// Returns the key identifying this observer in subscriber lists.
    fn observer_key(&self) -> ObserverKey;

    /// Receives one change notification.
    fn on_issue_changed(&self, change: &IssueChange);

    /// Whether resolving an issue removes this observer from it.
    fn unsubscribes_on_resolve(&self) -> bool {
        true
    }
}

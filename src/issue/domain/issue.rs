//! Issue aggregate and its subscriber protocol.

use super::{IssueAttribute, IssueChange, IssueDomainError, IssueId, IssueStatus, ObserverKey};
use crate::issue::ports::IssueObserver;
use crate::task::domain::NodeHandle;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// A report raised against a task.
///
/// Subscribers are kept in subscription order. Subscribing the same
/// observer twice keeps two entries and yields two deliveries per change.
#[derive(Clone)]
pub struct Issue {
    id: IssueId,
    name: String,
    description: String,
    status: IssueStatus,
    parent_task: Option<NodeHandle>,
    subscribers: Vec<Arc<dyn IssueObserver>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Issue {
    /// Creates a new issue in [`IssueStatus::New`].
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyName`] if the name is blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, IssueDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: IssueId::new(),
            name: normalize_name(name.into())?,
            description: description.into(),
            status: IssueStatus::New,
            parent_task: None,
            subscribers: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the issue identifier.
    #[must_use]
    pub const fn id(&self) -> IssueId {
        self.id
    }

    /// Returns the issue name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the issue description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> IssueStatus {
        self.status
    }

    /// Returns the task the issue was raised against.
    #[must_use]
    pub const fn parent_task(&self) -> Option<NodeHandle> {
        self.parent_task
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the task the issue belongs to.
    pub const fn set_parent_task(&mut self, parent_task: Option<NodeHandle>) {
        self.parent_task = parent_task;
    }

    /// Appends a subscriber.
    pub fn subscribe(&mut self, observer: Arc<dyn IssueObserver>) {
        debug!(issue_id = %self.id, observer = %observer.observer_key(), "subscribed to issue");
        self.subscribers.push(observer);
    }

    /// Removes the first subscription matching `key`.
    ///
    /// Returns `false`, and changes nothing, when the observer is not
    /// subscribed.
    pub fn unsubscribe(&mut self, key: ObserverKey) -> bool {
        let Some(position) = self
            .subscribers
            .iter()
            .position(|observer| observer.observer_key() == key)
        else {
            return false;
        };
        self.subscribers.remove(position);
        debug!(issue_id = %self.id, observer = %key, "unsubscribed from issue");
        true
    }

    /// Returns `true` if `key` holds at least one subscription.
    #[must_use]
    pub fn is_subscribed(&self, key: ObserverKey) -> bool {
        self.subscribers
            .iter()
            .any(|observer| observer.observer_key() == key)
    }

    /// Returns the subscriber keys in subscription order.
    #[must_use]
    pub fn subscriber_keys(&self) -> Vec<ObserverKey> {
        self.subscribers
            .iter()
            .map(|observer| observer.observer_key())
            .collect()
    }

    /// Returns the number of subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Renames the issue, notifying subscribers if the name changed.
    ///
    /// The value is stored and delivered exactly as given. Returns whether
    /// a change was made.
    pub fn set_name(&mut self, name: impl Into<String>, clock: &impl Clock) -> bool {
        let renamed = name.into();
        if renamed == self.name {
            return false;
        }
        self.name = renamed;
        self.touch(clock);
        self.notify(IssueAttribute::Name, self.name.clone());
        true
    }

    /// Replaces the description, notifying subscribers if it changed.
    ///
    /// Returns whether a change was made.
    pub fn set_description(&mut self, description: impl Into<String>, clock: &impl Clock) -> bool {
        let description = description.into();
        if description == self.description {
            return false;
        }
        self.description = description;
        self.touch(clock);
        self.notify(IssueAttribute::Description, self.description.clone());
        true
    }

    /// Sets the status.
    ///
    /// Entering [`IssueStatus::Resolved`] notifies every current subscriber
    /// once per subscription and, after all deliveries, unsubscribes every
    /// subscriber that opts into it. Delivery works on a snapshot, so no
    /// subscriber is skipped. Other statuses notify nobody.
    pub fn set_status(&mut self, status: IssueStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
        if status != IssueStatus::Resolved {
            return;
        }

        let snapshot = self.subscribers.clone();
        let change = IssueChange::new(self, IssueAttribute::Status, status.as_str());
        for observer in &snapshot {
            observer.on_issue_changed(&change);
        }
        for observer in snapshot
            .iter()
            .filter(|observer| observer.unsubscribes_on_resolve())
        {
            self.unsubscribe(observer.observer_key());
        }
        info!(
            issue_id = %self.id,
            notified = snapshot.len(),
            remaining = self.subscribers.len(),
            "issue resolved"
        );
    }

    fn notify(&self, attribute: IssueAttribute, value: String) {
        let change = IssueChange::new(self, attribute, value);
        for observer in &self.subscribers {
            observer.on_issue_changed(&change);
        }
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl fmt::Debug for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Issue")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("status", &self.status)
            .field("parent_task", &self.parent_task)
            .field("subscribers", &self.subscriber_keys())
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

fn normalize_name(raw: String) -> Result<String, IssueDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IssueDomainError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

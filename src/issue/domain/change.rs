//! Change events delivered to issue subscribers.

use super::{Issue, IssueId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue attribute named in a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueAttribute {
    /// The issue name.
    Name,
    /// The issue description.
    Description,
    /// The issue status.
    Status,
}

impl IssueAttribute {
    /// Returns the attribute name carried in notifications.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Status => "Status",
        }
    }
}

impl fmt::Display for IssueAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Notification that an issue attribute took a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueChange {
    issue: IssueId,
    issue_name: String,
    attribute: IssueAttribute,
    value: String,
}

impl IssueChange {
    pub(super) fn new(issue: &Issue, attribute: IssueAttribute, value: impl Into<String>) -> Self {
        Self {
            issue: issue.id(),
            issue_name: issue.name().to_owned(),
            attribute,
            value: value.into(),
        }
    }

    /// Returns the changed issue.
    #[must_use]
    pub const fn issue(&self) -> IssueId {
        self.issue
    }

    /// Returns the issue name at the time of the change.
    #[must_use]
    pub fn issue_name(&self) -> &str {
        &self.issue_name
    }

    /// Returns the changed attribute.
    #[must_use]
    pub const fn attribute(&self) -> IssueAttribute {
        self.attribute
    }

    /// Returns the new value as text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

//! Issue status values.

use super::ParseIssueStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue status.
///
/// The usual progression is `New`, `Updated`, `FixInProgress`, `Resolved`,
/// but any status may be set at any time. Only entering `Resolved` has side
/// effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Freshly reported.
    #[default]
    New,
    /// Report details changed since it was raised.
    Updated,
    /// Someone is working on a fix.
    FixInProgress,
    /// The issue is closed.
    Resolved,
}

impl IssueStatus {
    /// Returns the display name used in change notifications.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Updated => "Updated",
            Self::FixInProgress => "FixInProgress",
            Self::Resolved => "Resolved",
        }
    }
}

impl TryFrom<&str> for IssueStatus {
    type Error = ParseIssueStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', ' '], "");
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "updated" => Ok(Self::Updated),
            "fixinprogress" => Ok(Self::FixInProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ParseIssueStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

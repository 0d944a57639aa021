//! Team member value.

use super::{MemberId, TeamDomainError, TeamId};
use serde::{Deserialize, Serialize};

/// A person who can be assigned tasks and notified about issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: MemberId,
    name: String,
    team: TeamId,
}

impl TeamMember {
    /// Creates a member belonging to `team`.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDomainError::EmptyMemberName`] if the name is blank.
    pub fn new(name: impl Into<String>, team: TeamId) -> Result<Self, TeamDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TeamDomainError::EmptyMemberName);
        }
        Ok(Self {
            id: MemberId::new(),
            name: trimmed.to_owned(),
            team,
        })
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member's home team.
    #[must_use]
    pub const fn team(&self) -> TeamId {
        self.team
    }
}

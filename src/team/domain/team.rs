//! Team value with ordered membership.

use super::{MemberId, TeamDomainError, TeamId};
use serde::{Deserialize, Serialize};

/// A named group of members.
///
/// Membership keeps insertion order. A member may be listed on several
/// teams besides their home team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    members: Vec<MemberId>,
}

impl Team {
    /// Creates an empty team.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDomainError::EmptyTeamName`] if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, TeamDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TeamDomainError::EmptyTeamName);
        }
        Ok(Self {
            id: TeamId::new(),
            name: trimmed.to_owned(),
            members: Vec::new(),
        })
    }

    /// Returns the team identifier.
    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the members in the order they joined.
    #[must_use]
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    /// Returns `true` if `member` is listed on the team.
    #[must_use]
    pub fn contains(&self, member: MemberId) -> bool {
        self.members.contains(&member)
    }

    /// Appends a member unless already listed. Returns whether it was added.
    pub fn enlist(&mut self, member: MemberId) -> bool {
        if self.contains(member) {
            return false;
        }
        self.members.push(member);
        true
    }
}

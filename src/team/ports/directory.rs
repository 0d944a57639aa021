//! Directory port for resolving teams and members.

use crate::team::domain::{MemberId, Team, TeamId, TeamMember};
use thiserror::Error;

/// Result type for team directory operations.
pub type TeamDirectoryResult<T> = Result<T, TeamDirectoryError>;

/// Read access to teams and members.
pub trait TeamDirectory {
    /// Finds a team by identifier.
    fn find_team(&self, id: TeamId) -> Option<&Team>;

    /// Finds a member by identifier.
    fn find_member(&self, id: MemberId) -> Option<&TeamMember>;

    /// Returns a team or an error naming the missing id.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDirectoryError::UnknownTeam`] if the team is missing.
    fn team(&self, id: TeamId) -> TeamDirectoryResult<&Team> {
        self.find_team(id).ok_or(TeamDirectoryError::UnknownTeam(id))
    }

    /// Returns a member or an error naming the missing id.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDirectoryError::UnknownMember`] if the member is
    /// missing.
    fn member(&self, id: MemberId) -> TeamDirectoryResult<&TeamMember> {
        self.find_member(id)
            .ok_or(TeamDirectoryError::UnknownMember(id))
    }
}

/// Errors returned by team directory implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamDirectoryError {
    /// The team is not registered.
    #[error("team not found: {0}")]
    UnknownTeam(TeamId),

    /// The member is not registered.
    #[error("member not found: {0}")]
    UnknownMember(MemberId),

    /// A team with the same identifier already exists.
    #[error("duplicate team identifier: {0}")]
    DuplicateTeam(TeamId),

    /// A member with the same identifier already exists.
    #[error("duplicate member identifier: {0}")]
    DuplicateMember(MemberId),
}

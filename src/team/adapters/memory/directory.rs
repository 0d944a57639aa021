//! In-memory implementation of the team directory port.

use crate::team::{
    domain::{MemberId, Team, TeamId, TeamMember},
    ports::{TeamDirectory, TeamDirectoryError, TeamDirectoryResult},
};
use std::collections::HashMap;

/// In-memory team directory for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamDirectory {
    teams: HashMap<TeamId, Team>,
    members: HashMap<MemberId, TeamMember>,
}

impl InMemoryTeamDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a team.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDirectoryError::DuplicateTeam`] if the id is taken.
    pub fn add_team(&mut self, team: Team) -> TeamDirectoryResult<TeamId> {
        let id = team.id();
        if self.teams.contains_key(&id) {
            return Err(TeamDirectoryError::DuplicateTeam(id));
        }
        self.teams.insert(id, team);
        Ok(id)
    }

    /// Registers a member and lists them on their home team.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDirectoryError::UnknownTeam`] if the home team is not
    /// registered, or [`TeamDirectoryError::DuplicateMember`] if the id is
    /// taken.
    pub fn add_member(&mut self, member: TeamMember) -> TeamDirectoryResult<MemberId> {
        let id = member.id();
        if self.members.contains_key(&id) {
            return Err(TeamDirectoryError::DuplicateMember(id));
        }
        let home = member.team();
        self.teams
            .get_mut(&home)
            .ok_or(TeamDirectoryError::UnknownTeam(home))?
            .enlist(id);
        self.members.insert(id, member);
        Ok(id)
    }

    /// Lists an existing member on an additional team.
    ///
    /// Returns `false` if the member was already listed there.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDirectoryError::UnknownMember`] or
    /// [`TeamDirectoryError::UnknownTeam`] for unregistered ids.
    pub fn enlist(&mut self, member: MemberId, team: TeamId) -> TeamDirectoryResult<bool> {
        if !self.members.contains_key(&member) {
            return Err(TeamDirectoryError::UnknownMember(member));
        }
        let target = self
            .teams
            .get_mut(&team)
            .ok_or(TeamDirectoryError::UnknownTeam(team))?;
        Ok(target.enlist(member))
    }
}

impl TeamDirectory for InMemoryTeamDirectory {
    fn find_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    fn find_member(&self, id: MemberId) -> Option<&TeamMember> {
        self.members.get(&id)
    }
}

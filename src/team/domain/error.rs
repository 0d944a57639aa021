//! Error types for team domain validation.

use thiserror::Error;

/// Errors returned while constructing teams and members.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamDomainError {
    /// The member name is empty after trimming.
    #[error("member name must not be empty")]
    EmptyMemberName,

    /// The team name is empty after trimming.
    #[error("team name must not be empty")]
    EmptyTeamName,
}

//! Error types for issue validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or editing issues.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The issue name is empty after trimming.
    #[error("issue name must not be empty")]
    EmptyName,
}

/// Error returned while parsing issue statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown issue status: {0}")]
pub struct ParseIssueStatusError(pub String);

//! Error types for tracker configuration loading.

use thiserror::Error;

/// Errors returned while loading or validating a [`super::TrackerConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the schema.
    #[error("failed to parse tracker configuration: {0}")]
    Parse(String),

    /// The per-composite child capacity is outside `1..=99`.
    #[error("invalid child capacity {0}, expected a value between 1 and 99")]
    InvalidChildCapacity(u16),

    /// A template field is empty after trimming.
    #[error("template '{0}' must not be empty")]
    EmptyTemplate(&'static str),
}

//! Port contracts for team lookups.

pub mod directory;

pub use directory::{TeamDirectory, TeamDirectoryError, TeamDirectoryResult};

//! In-memory team directory.

mod directory;

pub use directory::InMemoryTeamDirectory;

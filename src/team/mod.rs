//! Team members and teams as seen by the task tracker.
//!
//! The tracker only needs member names, team membership lists and a way to
//! deliver issue notifications to members. Registries beyond that live
//! outside this crate.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;

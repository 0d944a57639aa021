//! Issue reports and change notification.
//!
//! Issues are raised against a task and keep their own subscriber list.
//! Changing an issue's name or description notifies every subscriber;
//! resolving it notifies every subscriber and then unsubscribes them.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;

//! Runtime configuration for the task tracker.
//!
//! [`TrackerConfig`] carries the knobs shared by the task tree, the
//! identifier allocator and the notification adapters. It deserializes from
//! JSON with per-field defaults so partial documents are accepted.

mod error;
mod tracker;

pub use error::ConfigError;
pub use tracker::{ChildCapacityPolicy, MAX_CHILD_CAPACITY, TrackerConfig};

#[cfg(test)]
mod tests;

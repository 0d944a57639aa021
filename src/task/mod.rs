//! Hierarchical task tracking.
//!
//! Tasks group into composites of arbitrary depth. Identifiers encode the
//! position in the hierarchy, issues hang off individual tasks, and
//! decorators add urgency or meeting details on top of a node:
//!
//! - Domain types in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;

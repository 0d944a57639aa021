//! Sprint calendar bookkeeping.
//!
//! A sprint is a set of numbered days, each holding the root tasks due that
//! day. Task trees themselves stay in [`crate::task`].

pub mod domain;

#[cfg(test)]
mod tests;

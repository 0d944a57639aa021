//! Gropius: hierarchical sprint task tracking.
//!
//! This crate models a sprint as a forest of task trees. Tasks group into
//! composites of arbitrary depth and carry identifiers that encode their
//! position in the hierarchy. Issues raised against tasks notify interested
//! team members when they change, and decorators layer urgency and meeting
//! details over tasks without touching the tree.
//!
//! # Architecture
//!
//! Gropius follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`config`]: Tracker configuration and defaults
//! - [`task`]: Task hierarchy, identifiers, traversal and decorators
//! - [`issue`]: Issue reports and subscriber notification
//! - [`team`]: Team members, teams and member inboxes
//! - [`sprint`]: Sprint days and their scheduled root tasks

pub mod config;
pub mod issue;
pub mod sprint;
pub mod task;
pub mod team;

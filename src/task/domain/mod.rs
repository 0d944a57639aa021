//! Domain model for the task hierarchy.
//!
//! Tasks live in a [`TaskTree`] arena and are addressed by [`NodeHandle`].
//! Each node receives a hierarchical [`TaskId`] from the tree's
//! [`IdAllocator`] when it is declared a root or attached to a composite.
//! [`TaskDecorator`] layers urgency and meeting metadata over nodes without
//! touching the tree.

mod allocator;
mod decorator;
mod error;
mod ids;
mod node;
mod registry;
mod tree;

pub use allocator::IdAllocator;
pub use decorator::{DecoratorCore, DecoratorKind, TaskDecorator};
pub use error::{TaskTreeError, TaskTreeResult};
pub use ids::{NodeHandle, TaskId};
pub use node::{NewTask, Placement, TaskKind, TaskNode};
pub use registry::ObserverRegistry;
pub use tree::{TaskTree, TraversalEntry};

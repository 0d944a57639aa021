//! Adapter implementations for issue observer ports.

pub mod memory;

//! Domain model for sprints and their days.

mod day;
mod error;
mod sprint;

pub use day::{Day, DayOrdinal};
pub use error::SprintError;
pub use sprint::Sprint;

//! Sprint day holding root tasks.

use super::SprintError;
use crate::task::domain::NodeHandle;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a day within a sprint, from 1 to [`DayOrdinal::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayOrdinal(u8);

impl DayOrdinal {
    /// Number of days in a sprint.
    pub const MAX: u8 = 14;

    /// Creates a validated day ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`SprintError::OrdinalOutOfRange`] outside `1..=14`.
    pub const fn new(value: u8) -> Result<Self, SprintError> {
        if value == 0 || value > Self::MAX {
            return Err(SprintError::OrdinalOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DayOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One sprint day and the root tasks due on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    ordinal: DayOrdinal,
    date: NaiveDate,
    root_tasks: Vec<NodeHandle>,
}

impl Day {
    /// Creates an empty day.
    #[must_use]
    pub const fn new(ordinal: DayOrdinal, date: NaiveDate) -> Self {
        Self {
            ordinal,
            date,
            root_tasks: Vec::new(),
        }
    }

    /// Returns the day ordinal.
    #[must_use]
    pub const fn ordinal(&self) -> DayOrdinal {
        self.ordinal
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the date as a `YYYYMMDD` key.
    #[must_use]
    pub fn date_key(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    /// Returns the root tasks in the order they were scheduled.
    #[must_use]
    pub fn primary_tasks(&self) -> &[NodeHandle] {
        &self.root_tasks
    }

    pub(super) fn add_task(&mut self, task: NodeHandle) {
        self.root_tasks.push(task);
    }
}

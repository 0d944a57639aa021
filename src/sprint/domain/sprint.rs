//! Sprint aggregate.

use super::{Day, DayOrdinal, SprintError};
use crate::task::domain::{NodeHandle, TaskTree};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Days of a sprint keyed by ordinal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprint {
    days: BTreeMap<DayOrdinal, Day>,
}

impl Sprint {
    /// Creates a sprint with no days.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a day.
    ///
    /// # Errors
    ///
    /// Returns [`SprintError::OrdinalOutOfRange`] for invalid ordinals or
    /// [`SprintError::DuplicateDay`] when the ordinal is taken.
    pub fn add_day(&mut self, ordinal: u8, date: NaiveDate) -> Result<&Day, SprintError> {
        let key = DayOrdinal::new(ordinal)?;
        if self.days.contains_key(&key) {
            return Err(SprintError::DuplicateDay(ordinal));
        }
        Ok(&*self.days.entry(key).or_insert_with(|| Day::new(key, date)))
    }

    /// Returns a day by ordinal.
    #[must_use]
    pub fn day(&self, ordinal: u8) -> Option<&Day> {
        let key = DayOrdinal::new(ordinal).ok()?;
        self.days.get(&key)
    }

    /// Iterates over the days in ordinal order.
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.days.values()
    }

    /// Schedules a root task on a day.
    ///
    /// # Errors
    ///
    /// Returns [`SprintError::UnknownDay`] for days not in the sprint,
    /// [`SprintError::NotARoot`] for non-root tasks, or
    /// [`SprintError::Tree`] for handles foreign to `tree`.
    pub fn schedule(
        &mut self,
        tree: &TaskTree,
        ordinal: u8,
        task: NodeHandle,
    ) -> Result<(), SprintError> {
        if !tree.node(task)?.is_root() {
            return Err(SprintError::NotARoot(task));
        }
        let key = DayOrdinal::new(ordinal)?;
        let day = self
            .days
            .get_mut(&key)
            .ok_or(SprintError::UnknownDay(ordinal))?;
        day.add_task(task);
        debug!(day = ordinal, %task, "scheduled root task");
        Ok(())
    }

    /// Returns the root tasks scheduled on days falling on `date`.
    #[must_use]
    pub fn tasks_due_on(&self, date: NaiveDate) -> Vec<NodeHandle> {
        self.days
            .values()
            .filter(|day| day.date() == date)
            .flat_map(|day| day.primary_tasks().iter().copied())
            .collect()
    }
}

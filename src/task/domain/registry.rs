//! Task-level watcher registry keyed by team.

use crate::issue::{domain::ObserverKey, ports::IssueObserver};
use crate::team::domain::TeamId;
use std::fmt;
use std::sync::Arc;

/// Observers watching a task, grouped by the team they belong to.
///
/// Within a team, each observer key is registered at most once. Teams keep
/// the order in which they were first registered, and observers keep their
/// registration order within a team, so iteration is deterministic.
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    teams: Vec<(TeamId, Vec<Arc<dyn IssueObserver>>)>,
}

impl ObserverRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer` under `team`.
    ///
    /// Returns `false` when the same observer key is already registered for
    /// that team.
    pub fn watch(&mut self, team: TeamId, observer: Arc<dyn IssueObserver>) -> bool {
        let key = observer.observer_key();
        if let Some((_, observers)) = self.teams.iter_mut().find(|(id, _)| *id == team) {
            if observers.iter().any(|existing| existing.observer_key() == key) {
                return false;
            }
            observers.push(observer);
            return true;
        }
        self.teams.push((team, vec![observer]));
        true
    }

    /// Removes every registration of the observer key, across all teams.
    ///
    /// Returns the number of registrations removed.
    pub fn unwatch(&mut self, key: ObserverKey) -> usize {
        let before = self.len();
        for (_, observers) in &mut self.teams {
            observers.retain(|observer| observer.observer_key() != key);
        }
        self.teams.retain(|(_, observers)| !observers.is_empty());
        before.saturating_sub(self.len())
    }

    /// Removes every observer registered under `team` and returns them.
    pub fn unwatch_team(&mut self, team: TeamId) -> Vec<Arc<dyn IssueObserver>> {
        let Some(position) = self.teams.iter().position(|(id, _)| *id == team) else {
            return Vec::new();
        };
        let (_, observers) = self.teams.remove(position);
        observers
    }

    /// Iterates over all observers, team by team.
    pub fn observers(&self) -> impl Iterator<Item = &Arc<dyn IssueObserver>> {
        self.teams.iter().flat_map(|(_, observers)| observers.iter())
    }

    /// Returns the observers registered under `team`.
    #[must_use]
    pub fn team_observers(&self, team: TeamId) -> &[Arc<dyn IssueObserver>] {
        self.teams
            .iter()
            .find(|(id, _)| *id == team)
            .map(|(_, observers)| observers.as_slice())
            .unwrap_or_default()
    }

    /// Returns the teams with at least one observer, in registration order.
    pub fn teams(&self) -> impl Iterator<Item = TeamId> + '_ {
        self.teams.iter().map(|(id, _)| *id)
    }

    /// Returns the total number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.iter().map(|(_, observers)| observers.len()).sum()
    }

    /// Returns `true` when no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (team, observers) in &self.teams {
            let keys: Vec<ObserverKey> = observers
                .iter()
                .map(|observer| observer.observer_key())
                .collect();
            map.entry(team, &keys);
        }
        map.finish()
    }
}

//! Shared world state for task tree BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use gropius::issue::{adapters::memory::RecordingObserver, domain::IssueId};
use gropius::task::domain::{NodeHandle, TaskId, TaskTree, TaskTreeError};
use mockable::DefaultClock;
use rstest::fixture;

/// Scenario world for task tree behaviour tests.
pub struct TreeWorld {
    /// The tree under test.
    pub tree: TaskTree,
    /// Clock used to stamp issues.
    pub clock: DefaultClock,
    /// Task handles by scenario name.
    pub tasks: HashMap<String, NodeHandle>,
    /// Observers by scenario name.
    pub observers: HashMap<String, Arc<RecordingObserver>>,
    /// Issue raised in the scenario, with the task it hangs off.
    pub current_issue: Option<(NodeHandle, IssueId)>,
    /// Task names from the last traversal.
    pub last_traversal: Vec<String>,
    /// Result of the last attachment attempt.
    pub last_attach: Option<Result<TaskId, TaskTreeError>>,
}

impl TreeWorld {
    /// Creates a world around an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: TaskTree::default(),
            clock: DefaultClock,
            tasks: HashMap::new(),
            observers: HashMap::new(),
            current_issue: None,
            last_traversal: Vec::new(),
            last_attach: None,
        }
    }

    /// Looks up a task handle by scenario name.
    pub fn task(&self, name: &str) -> Result<NodeHandle, eyre::Report> {
        self.tasks
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task '{name}' in scenario world"))
    }

    /// Returns the issue raised in the scenario.
    pub fn issue(&self) -> Result<(NodeHandle, IssueId), eyre::Report> {
        self.current_issue
            .ok_or_else(|| eyre::eyre!("no issue raised in scenario world"))
    }
}

impl Default for TreeWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TreeWorld {
    TreeWorld::default()
}

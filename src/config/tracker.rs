//! Tracker configuration values and defaults.

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest number of direct children a composite can hold before child ids
/// spill into the next base-100 digit group.
pub const MAX_CHILD_CAPACITY: u16 = 99;

const DEFAULT_LINE_TEMPLATE: &str = "{{ indent }}{{ id }}: {{ name }}";
const DEFAULT_NOTIFICATION_TEMPLATE: &str =
    "{{ member }} ({{ team }}): issue '{{ issue }}' {{ attribute }} is now {{ value }}";

/// Behaviour of the identifier allocator once a composite reaches its child
/// capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildCapacityPolicy {
    /// Refuse to allocate and report the exhausted parent.
    #[default]
    Reject,
    /// Keep counting past the capacity. Ids produced this way collide with
    /// the first children of a sibling subtree.
    Unchecked,
}

impl ChildCapacityPolicy {
    /// Returns the canonical configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Unchecked => "unchecked",
        }
    }
}

/// Configuration shared by the task tree and notification adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Maximum number of direct children per composite task.
    pub child_capacity: u16,
    /// What to do when a composite exceeds `child_capacity`.
    pub capacity_policy: ChildCapacityPolicy,
    /// `minijinja` template for traversal lines. Receives `indent`, `depth`,
    /// `id` and `name`.
    pub line_template: String,
    /// `minijinja` template for member inbox notifications. Receives
    /// `member`, `team`, `issue`, `attribute` and `value`.
    pub notification_template: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            child_capacity: MAX_CHILD_CAPACITY,
            capacity_policy: ChildCapacityPolicy::Reject,
            line_template: DEFAULT_LINE_TEMPLATE.to_owned(),
            notification_template: DEFAULT_NOTIFICATION_TEMPLATE.to_owned(),
        }
    }
}

impl TrackerConfig {
    /// Creates a configuration that reproduces the historical allocator,
    /// which silently hands out colliding ids past 99 children.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            capacity_policy: ChildCapacityPolicy::Unchecked,
            ..Self::default()
        }
    }

    /// Sets the child capacity.
    #[must_use]
    pub fn with_child_capacity(mut self, capacity: u16) -> Self {
        self.child_capacity = capacity;
        self
    }

    /// Sets the traversal line template.
    #[must_use]
    pub fn with_line_template(mut self, template: impl Into<String>) -> Self {
        self.line_template = template.into();
        self
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error
    /// reported by [`TrackerConfig::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidChildCapacity`] when the capacity is
    /// outside `1..=99`, or [`ConfigError::EmptyTemplate`] when a template
    /// is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.child_capacity == 0 || self.child_capacity > MAX_CHILD_CAPACITY {
            return Err(ConfigError::InvalidChildCapacity(self.child_capacity));
        }
        if self.line_template.trim().is_empty() {
            return Err(ConfigError::EmptyTemplate("line_template"));
        }
        if self.notification_template.trim().is_empty() {
            return Err(ConfigError::EmptyTemplate("notification_template"));
        }
        Ok(())
    }
}

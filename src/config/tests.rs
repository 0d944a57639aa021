//! Tests for tracker configuration parsing and validation.

use super::{ChildCapacityPolicy, ConfigError, MAX_CHILD_CAPACITY, TrackerConfig};
use rstest::rstest;

#[rstest]
fn default_config_rejects_past_ninety_nine_children() {
    let config = TrackerConfig::default();

    assert_eq!(config.child_capacity, MAX_CHILD_CAPACITY);
    assert_eq!(config.capacity_policy, ChildCapacityPolicy::Reject);
    assert_eq!(config.validate(), Ok(()));
}

#[rstest]
fn legacy_config_uses_unchecked_policy() {
    assert_eq!(
        TrackerConfig::legacy().capacity_policy,
        ChildCapacityPolicy::Unchecked
    );
}

#[rstest]
fn from_json_str_fills_missing_fields_with_defaults() {
    let config = TrackerConfig::from_json_str(r#"{"capacity_policy": "unchecked"}"#)
        .expect("partial config should parse");

    assert_eq!(config.capacity_policy, ChildCapacityPolicy::Unchecked);
    assert_eq!(config.child_capacity, MAX_CHILD_CAPACITY);
    assert_eq!(config.line_template, TrackerConfig::default().line_template);
}

#[rstest]
#[case(0)]
#[case(100)]
fn from_json_str_rejects_out_of_range_capacity(#[case] capacity: u16) {
    let raw = format!(r#"{{"child_capacity": {capacity}}}"#);

    assert_eq!(
        TrackerConfig::from_json_str(&raw),
        Err(ConfigError::InvalidChildCapacity(capacity))
    );
}

#[rstest]
fn from_json_str_rejects_blank_line_template() {
    let result = TrackerConfig::from_json_str(r#"{"line_template": "   "}"#);

    assert_eq!(result, Err(ConfigError::EmptyTemplate("line_template")));
}

#[rstest]
fn from_json_str_reports_malformed_documents() {
    let result = TrackerConfig::from_json_str("{ not json");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

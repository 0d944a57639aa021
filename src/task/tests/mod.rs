//! Unit tests for the task hierarchy.

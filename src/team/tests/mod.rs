//! Unit tests for team lookups and member inboxes.

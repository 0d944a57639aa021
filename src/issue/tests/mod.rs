//! Unit tests for issues and their subscriber protocol.

mod status_tests;

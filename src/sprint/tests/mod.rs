//! Unit tests for sprint bookkeeping.

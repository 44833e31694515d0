//! Unit tests for the suggestion lifecycle.

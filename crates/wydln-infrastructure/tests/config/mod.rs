//! Configuration Tests
//!
//! Tests for configuration loading, validation, and saving.

mod validation_test;

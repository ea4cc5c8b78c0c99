// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for gql-check system-tests.
// Purpose: Provide assertion plumbing and scenario execution utilities.
// Dependencies: system-tests, gql-check-core, gql-check-harness
// ============================================================================

//! ## Overview
//! Shared helpers for gql-check system-tests.
//! Invariants:
//! - System-test execution is deterministic and fail-closed.
//! - Fixtures are rebuilt per test; no state crosses tests.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod scenarios;

/// Result type for panic-free test assertions.
pub type TestResult = Result<(), String>;

/// Returns an error carrying `message` when the condition is false.
///
/// # Errors
///
/// Returns the message as the test failure when `condition` is false.
pub fn ensure(condition: bool, message: &str) -> TestResult {
    if condition { Ok(()) } else { Err(message.to_string()) }
}

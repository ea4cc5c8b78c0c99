// crates/gql-check-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared helpers for gql-check-core integration tests.
// Purpose: Provide panic-free assertion plumbing for test suites.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Panic-free assertion helpers shared by the gql-check-core test suites.

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

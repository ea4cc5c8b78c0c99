// system-tests/tests/suites/error_assertions.rs
// ============================================================================
// Module: Error Assertion Suite
// Description: End-to-end error-path and error-message scenarios.
// Purpose: Exercise error expectations against resolver failures.
// Dependencies: system-tests helpers, gql-check-core, gql-check-harness
// ============================================================================

//! Error-response assertion system tests.

use gql_check_core::Expectation;
use gql_check_core::MessageMatch;
use gql_check_core::ValueCheck;
use gql_check_core::assert_query_error;
use serde_json::json;
use system_tests::fixtures;

use crate::helpers::TestResult;
use crate::helpers::ensure;
use crate::helpers::scenarios::run_operation;

/// Query text shared by the failing-type scenarios.
const FAILING_QUERY: &str = "query ($fail1: Boolean, $fail2: Boolean) { \
                             testFailingType { try(fail: $fail1) trying(fail: $fail2) } }";

/// Tests a failing scalar field with every message match mode.
#[test]
fn test_assert_query_error_on_scalar() -> TestResult {
    let executor = fixtures::failing_executor()?;

    let response =
        run_operation(&executor, FAILING_QUERY, "failing", &[("fail1", json!(true))])?;

    let expected = vec![
        Expectation::error_path("testFailingType.try").map_err(|err| err.to_string())?,
        Expectation::error_message("testErrorQuery worked as expected", MessageMatch::Equals),
        Expectation::error_message("worked as", MessageMatch::Contains),
        Expectation::error_message("as expected", MessageMatch::EndsWith),
        Expectation::error_message("testErrorQuery worked", MessageMatch::StartsWith),
        Expectation::object("testFailingType.try", ValueCheck::IsNull)
            .map_err(|err| err.to_string())?,
        Expectation::object(
            "testFailingType.trying",
            ValueCheck::Equals(json!(["No", "fails", "here", "either"])),
        )
        .map_err(|err| err.to_string())?,
    ];

    assert_query_error(&response, &expected).map_err(|err| err.to_string())?;
    Ok(())
}

/// Tests a failing list field nulls only itself.
#[test]
fn test_assert_query_error_on_list() -> TestResult {
    let executor = fixtures::failing_executor()?;

    let response =
        run_operation(&executor, FAILING_QUERY, "failing", &[("fail2", json!(true))])?;

    let expected = vec![
        Expectation::error_path("testFailingType.trying").map_err(|err| err.to_string())?,
        Expectation::object("testFailingType.try", ValueCheck::Equals(json!("No fails here")))
            .map_err(|err| err.to_string())?,
        Expectation::object("testFailingType.trying", ValueCheck::IsNull)
            .map_err(|err| err.to_string())?,
    ];

    assert_query_error(&response, &expected).map_err(|err| err.to_string())?;
    Ok(())
}

/// Tests a clean execution fails the error assertion.
#[test]
fn test_error_assertion_requires_errors() -> TestResult {
    let executor = fixtures::failing_executor()?;

    let response = run_operation(&executor, FAILING_QUERY, "failing", &[])?;

    ensure(!response.has_errors(), "Expected no resolver failures without fail flags")?;
    ensure(
        assert_query_error(&response, &[]).is_err(),
        "Expected the error assertion to reject a clean response",
    )?;
    Ok(())
}

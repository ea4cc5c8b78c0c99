// system-tests/tests/helpers/scenarios.rs
// ============================================================================
// Module: Scenario Helpers
// Description: Query execution shortcuts over the shared fixtures.
// Purpose: Keep suites declarative by hiding executor plumbing.
// Dependencies: system-tests fixtures, gql-check-core, gql-check-harness
// ============================================================================

//! ## Overview
//! Scenario helpers execute one named operation against a fixture executor
//! and hand the response back for assertion, converting infrastructure
//! errors into test failures.

use gql_check_core::QueryExecutor;
use gql_check_core::QueryRequest;
use gql_check_core::QueryResponse;
use gql_check_harness::ScriptedExecutor;
use serde_json::Value;

/// Executes a named operation with variables against the executor.
///
/// # Errors
///
/// Returns a description when execution fails at the transport level.
pub fn run_operation(
    executor: &ScriptedExecutor,
    query: &str,
    operation: &str,
    variables: &[(&str, Value)],
) -> Result<QueryResponse, String> {
    let mut request = QueryRequest::new(query).with_operation_name(operation);
    for (name, value) in variables {
        request = request.with_variable(*name, value.clone());
    }
    executor.execute(&request).map_err(|err| err.to_string())
}

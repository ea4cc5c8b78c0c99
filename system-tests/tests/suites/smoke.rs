// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke Suite
// Description: Minimal end-to-end pass through executor and asserter.
// Purpose: Catch wiring regressions before the functional suites run.
// Dependencies: system-tests helpers, gql-check-core, gql-check-harness
// ============================================================================

//! Smoke system tests for the assertion pipeline.

use gql_check_core::Expectation;
use gql_check_core::ValueCheck;
use gql_check_core::assert_query_successful;
use serde_json::json;
use system_tests::fixtures;

use crate::helpers::TestResult;
use crate::helpers::ensure;
use crate::helpers::scenarios::run_operation;

/// Tests one query flows from execution to a passing assertion.
#[test]
fn test_smoke_query_and_assert() -> TestResult {
    let executor = fixtures::blog_executor()?;
    let post_id = fixtures::relay_id("post", fixtures::POST_ONE_ID)?;

    let response = run_operation(
        &executor,
        "query ($id: ID!) { post(id: $id) { id databaseId } posts { nodes { id } } }",
        "postAndPosts",
        &[("id", json!(post_id))],
    )?;

    ensure(!response.has_errors(), "Expected the smoke query to execute cleanly")?;

    let expected = vec![
        Expectation::object("post.id", ValueCheck::Exists).map_err(|err| err.to_string())?,
        Expectation::object("post.databaseId", ValueCheck::Equals(json!(fixtures::POST_ONE_ID)))
            .map_err(|err| err.to_string())?,
    ];
    assert_query_successful(&response, &expected).map_err(|err| err.to_string())?;
    Ok(())
}

// system-tests/tests/suites/assertions.rs
// ============================================================================
// Module: Assertion Suite
// Description: End-to-end successful-query assertion scenarios.
// Purpose: Exercise the full expectation vocabulary against the blog fixture.
// Dependencies: system-tests helpers, gql-check-core, gql-check-harness
// ============================================================================

//! Successful-query assertion system tests.

use gql_check_core::ElementMatching;
use gql_check_core::Expectation;
use gql_check_core::ValueCheck;
use gql_check_core::assert_query_successful;
use gql_check_core::evaluate_query_successful;
use gql_check_core::evaluate_with_trace;
use match_logic::RecordingTrace;
use match_logic::Verdict;
use serde_json::json;
use system_tests::fixtures;

use crate::helpers::TestResult;
use crate::helpers::ensure;
use crate::helpers::scenarios::run_operation;

/// Tests the full expectation vocabulary on a single-post query.
#[test]
fn test_assert_query_successful() -> TestResult {
    let executor = fixtures::blog_executor()?;
    let post_id = fixtures::relay_id("post", fixtures::POST_ONE_ID)?;
    let unneeded_id = fixtures::relay_id("post", 10_001)?;

    let response = run_operation(
        &executor,
        "query ($id: ID!) { post(id: $id) { id databaseId } posts { nodes { id } } }",
        "postAndPosts",
        &[("id", json!(post_id))],
    )?;

    let expected = vec![
        // Field existence, regardless of value.
        Expectation::object("post.id", ValueCheck::Exists).map_err(|err| err.to_string())?,
        // The field must not be null.
        Expectation::object("post.id", ValueCheck::IsNull)
            .map_err(|err| err.to_string())?
            .negate(),
        Expectation::object("post.id", ValueCheck::Equals(json!(post_id)))
            .map_err(|err| err.to_string())?,
        Expectation::object("post.databaseId", ValueCheck::Equals(json!(fixtures::POST_ONE_ID)))
            .map_err(|err| err.to_string())?,
        Expectation::object("post.databaseId", ValueCheck::Equals(json!(10_001)))
            .map_err(|err| err.to_string())?
            .negate(),
        Expectation::node(
            "posts.nodes",
            ElementMatching::fields(json!({"id": post_id})).map_err(|err| err.to_string())?,
        )
        .map_err(|err| err.to_string())?,
        Expectation::node(
            "posts.nodes",
            ElementMatching::fields(json!({"id": unneeded_id})).map_err(|err| err.to_string())?,
        )
        .map_err(|err| err.to_string())?
        .negate(),
    ];

    assert_query_successful(&response, &expected).map_err(|err| err.to_string())?;
    Ok(())
}

/// Tests a wrong expectation set reports every mismatch at once.
#[test]
fn test_failed_assertions_all_reported() -> TestResult {
    let executor = fixtures::blog_executor()?;
    let post_id = fixtures::relay_id("post", fixtures::POST_ONE_ID)?;

    let response = run_operation(
        &executor,
        "query ($id: ID!) { post(id: $id) { id databaseId } posts { nodes { id } } }",
        "postAndPosts",
        &[("id", json!(post_id))],
    )?;

    let expected = vec![
        Expectation::object("post.databaseId", ValueCheck::Equals(json!(10_001)))
            .map_err(|err| err.to_string())?,
        Expectation::object("post.slug", ValueCheck::Exists).map_err(|err| err.to_string())?,
    ];

    let report = evaluate_query_successful(&response, &expected);
    ensure(report.len() == 2, "Expected both failed expectations in one report")?;
    Ok(())
}

/// Tests traced evaluation observes each expectation's verdict.
#[test]
fn test_traced_evaluation() -> TestResult {
    let executor = fixtures::blog_executor()?;
    let post_id = fixtures::relay_id("post", fixtures::POST_ONE_ID)?;

    let response = run_operation(
        &executor,
        "query ($id: ID!) { post(id: $id) { id databaseId } posts { nodes { id } } }",
        "postAndPosts",
        &[("id", json!(post_id))],
    )?;

    let expectations = vec![
        Expectation::object("post.databaseId", ValueCheck::Equals(json!(fixtures::POST_ONE_ID)))
            .map_err(|err| err.to_string())?,
        Expectation::object("post.databaseId", ValueCheck::Equals(json!(10_001)))
            .map_err(|err| err.to_string())?,
    ];

    let mut trace = RecordingTrace::default();
    let verdict = evaluate_with_trace(&response, &expectations, &mut trace);
    ensure(verdict == Verdict::Fail, "Expected the mixed set to fail overall")?;
    ensure(trace.entries().len() == 2, "Expected one trace entry per expectation")?;
    ensure(trace.entries()[0].1 == Verdict::Pass, "Expected the first expectation to pass")?;
    ensure(trace.entries()[1].1 == Verdict::Fail, "Expected the second expectation to fail")?;
    Ok(())
}

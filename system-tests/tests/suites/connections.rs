// system-tests/tests/suites/connections.rs
// ============================================================================
// Module: Connection Suite
// Description: Nested node and edge connection assertion scenarios.
// Purpose: Exercise nested expectations over both connection shapes.
// Dependencies: system-tests helpers, gql-check-core, gql-check-harness
// ============================================================================

//! Connection-matching system tests over nodes and edges shapes.

use gql_check_core::ElementMatching;
use gql_check_core::Expectation;
use gql_check_core::ValueCheck;
use gql_check_core::assert_query_successful;
use serde_json::json;
use system_tests::fixtures;

use crate::helpers::TestResult;
use crate::helpers::scenarios::run_operation;

/// Tests nested node expectations across two connection levels.
#[test]
fn test_complex_expected_nodes() -> TestResult {
    let executor = fixtures::blog_executor()?;

    let response = run_operation(
        &executor,
        "query { posts { nodes { databaseId categories { nodes { databaseId } } } } }",
        "postsWithCategories",
        &[],
    )?;

    let expected = vec![
        Expectation::node(
            "posts.nodes",
            ElementMatching::expectations(vec![
                Expectation::object("databaseId", ValueCheck::Equals(json!(fixtures::POST_ONE_ID)))
                    .map_err(|err| err.to_string())?,
                Expectation::node_at(
                    "categories.nodes",
                    ElementMatching::fields(json!({"databaseId": fixtures::CATEGORY_ID}))
                        .map_err(|err| err.to_string())?,
                    0,
                )
                .map_err(|err| err.to_string())?,
            ]),
        )
        .map_err(|err| err.to_string())?,
    ];

    assert_query_successful(&response, &expected).map_err(|err| err.to_string())?;
    Ok(())
}

/// Tests nested edge expectations across two connection levels.
#[test]
fn test_complex_expected_edges() -> TestResult {
    let executor = fixtures::blog_executor()?;

    let query = "query { posts { edges { node { \
                 databaseId categories { edges { node { databaseId } } } } } } }";
    let response = run_operation(&executor, query, "postsEdges", &[])?;

    let expected = vec![
        Expectation::edge_at(
            "posts.edges",
            ElementMatching::expectations(vec![
                Expectation::object("databaseId", ValueCheck::Equals(json!(fixtures::POST_ONE_ID)))
                    .map_err(|err| err.to_string())?,
                Expectation::edge(
                    "categories.edges",
                    ElementMatching::fields(json!({"databaseId": fixtures::CATEGORY_ID}))
                        .map_err(|err| err.to_string())?,
                )
                .map_err(|err| err.to_string())?,
            ]),
            0,
        )
        .map_err(|err| err.to_string())?,
    ];

    assert_query_successful(&response, &expected).map_err(|err| err.to_string())?;
    Ok(())
}

/// Tests the second post matches through the second list position.
#[test]
fn test_indexed_node_targeting() -> TestResult {
    let executor = fixtures::blog_executor()?;

    let response = run_operation(
        &executor,
        "query { posts { nodes { databaseId categories { nodes { databaseId } } } } }",
        "postsWithCategories",
        &[],
    )?;

    let expected = vec![
        Expectation::node_at(
            "posts.nodes",
            ElementMatching::fields(json!({"databaseId": fixtures::POST_TWO_ID}))
                .map_err(|err| err.to_string())?,
            1,
        )
        .map_err(|err| err.to_string())?,
        Expectation::node_at(
            "posts.nodes",
            ElementMatching::fields(json!({"databaseId": fixtures::POST_TWO_ID}))
                .map_err(|err| err.to_string())?,
            0,
        )
        .map_err(|err| err.to_string())?
        .negate(),
    ];

    assert_query_successful(&response, &expected).map_err(|err| err.to_string())?;
    Ok(())
}

// crates/gql-check-core/tests/evaluator.rs
// ============================================================================
// Module: Expectation Evaluator Tests
// Description: Tests for verdict evaluation of every expectation kind.
// Purpose: Validate value checks, connection matching, and error matching.
// Dependencies: gql_check_core::runtime::evaluator
// ============================================================================
//! ## Overview
//! Validates expectation evaluation semantics against fixed responses.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use gql_check_core::ElementMatching;
use gql_check_core::Expectation;
use gql_check_core::MessageMatch;
use gql_check_core::QueryResponse;
use gql_check_core::ResponseError;
use gql_check_core::Scope;
use gql_check_core::ValueCheck;
use gql_check_core::core::response::ErrorPathSegment;
use gql_check_core::evaluate;
use match_logic::Verdict;
use serde_json::Value;
use serde_json::json;
use support::TestResult;
use support::ensure;

/// Builds a successful response from a data tree.
fn response(data: Value) -> QueryResponse {
    QueryResponse::from_data(data)
}

/// Evaluates one expectation against a response.
fn verdict_of(expectation: &Expectation, response: &QueryResponse) -> Verdict {
    evaluate(expectation, &Scope::of_response(response))
}

// ============================================================================
// SECTION: Value Checks
// ============================================================================

/// Tests existence checks.
#[test]
fn test_exists_check() -> TestResult {
    let response = response(json!({"post": {"id": "cG9zdDo3", "featuredImage": null}}));

    let present =
        Expectation::object("post.id", ValueCheck::Exists).map_err(|err| err.to_string())?;
    let null_field = Expectation::object("post.featuredImage", ValueCheck::Exists)
        .map_err(|err| err.to_string())?;
    let absent =
        Expectation::object("post.missing", ValueCheck::Exists).map_err(|err| err.to_string())?;

    ensure(verdict_of(&present, &response) == Verdict::Pass, "Expected present field to exist")?;
    ensure(
        verdict_of(&null_field, &response) == Verdict::Pass,
        "Expected a null field to count as existing",
    )?;
    ensure(verdict_of(&absent, &response) == Verdict::Fail, "Expected missing field to fail")?;
    Ok(())
}

/// Tests null checks reject falsy non-null values.
#[test]
fn test_is_null_check() -> TestResult {
    let response = response(json!({
        "post": {"featuredImage": null, "commentCount": 0, "slug": "", "sticky": false}
    }));

    let null_check = Expectation::object("post.featuredImage", ValueCheck::IsNull)
        .map_err(|err| err.to_string())?;
    ensure(verdict_of(&null_check, &response) == Verdict::Pass, "Expected null to satisfy IsNull")?;

    for falsy_path in ["post.commentCount", "post.slug", "post.sticky"] {
        let check =
            Expectation::object(falsy_path, ValueCheck::IsNull).map_err(|err| err.to_string())?;
        ensure(
            verdict_of(&check, &response) == Verdict::Fail,
            "Expected falsy non-null values to fail IsNull",
        )?;
    }
    Ok(())
}

/// Tests deep equality checks.
#[test]
fn test_equals_check() -> TestResult {
    let response = response(json!({
        "post": {"databaseId": 7, "tags": ["a", "b"], "meta": {"views": 10, "pinned": true}}
    }));

    let equal = Expectation::object("post.databaseId", ValueCheck::Equals(json!(7)))
        .map_err(|err| err.to_string())?;
    let unequal = Expectation::object("post.databaseId", ValueCheck::Equals(json!(10_001)))
        .map_err(|err| err.to_string())?;
    let list = Expectation::object("post.tags", ValueCheck::Equals(json!(["a", "b"])))
        .map_err(|err| err.to_string())?;
    let object = Expectation::object(
        "post.meta",
        ValueCheck::Equals(json!({"views": 10, "pinned": true})),
    )
    .map_err(|err| err.to_string())?;

    ensure(verdict_of(&equal, &response) == Verdict::Pass, "Expected equal numbers to match")?;
    ensure(verdict_of(&unequal, &response) == Verdict::Fail, "Expected unequal numbers to fail")?;
    ensure(verdict_of(&list, &response) == Verdict::Pass, "Expected deep list equality to match")?;
    ensure(
        verdict_of(&object, &response) == Verdict::Pass,
        "Expected deep object equality to match",
    )?;
    Ok(())
}

/// Tests decimal-aware numeric equality.
#[test]
fn test_decimal_aware_equality() -> TestResult {
    let response = response(json!({"stats": {"ratio": 1.0, "count": 7}}));

    let integral = Expectation::object("stats.ratio", ValueCheck::Equals(json!(1)))
        .map_err(|err| err.to_string())?;
    let fractional = Expectation::object("stats.count", ValueCheck::Equals(json!(7.0)))
        .map_err(|err| err.to_string())?;
    let distinct = Expectation::object("stats.ratio", ValueCheck::Equals(json!(1.5)))
        .map_err(|err| err.to_string())?;

    ensure(
        verdict_of(&integral, &response) == Verdict::Pass,
        "Expected 1.0 to equal 1 under decimal comparison",
    )?;
    ensure(
        verdict_of(&fractional, &response) == Verdict::Pass,
        "Expected 7 to equal 7.0 under decimal comparison",
    )?;
    ensure(verdict_of(&distinct, &response) == Verdict::Fail, "Expected 1.0 to differ from 1.5")?;
    Ok(())
}

// ============================================================================
// SECTION: Negation
// ============================================================================

/// Tests negation inverts exactly the wrapped outcome.
#[test]
fn test_negation_inverts_outcome() -> TestResult {
    let response = response(json!({"post": {"databaseId": 7}}));

    let matching = Expectation::object("post.databaseId", ValueCheck::Equals(json!(7)))
        .map_err(|err| err.to_string())?;
    let negated = matching.clone().negate();
    let restored = negated.clone().negate();

    ensure(verdict_of(&matching, &response) == Verdict::Pass, "Expected the base to pass")?;
    ensure(verdict_of(&negated, &response) == Verdict::Fail, "Expected negation to invert")?;
    ensure(
        verdict_of(&restored, &response) == Verdict::Pass,
        "Expected double negation to restore",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Node Matching
// ============================================================================

/// Tests existential node matching over field maps.
#[test]
fn test_node_existential_match() -> TestResult {
    let response = response(json!({"posts": {"nodes": [{"id": "X"}, {"id": "Y"}]}}));

    let fields = ElementMatching::fields(json!({"id": "X"})).map_err(|err| err.to_string())?;
    let hit = Expectation::node("posts.nodes", fields).map_err(|err| err.to_string())?;
    ensure(verdict_of(&hit, &response) == Verdict::Pass, "Expected one matching node to pass")?;

    let fields = ElementMatching::fields(json!({"id": "Z"})).map_err(|err| err.to_string())?;
    let miss = Expectation::node("posts.nodes", fields).map_err(|err| err.to_string())?;
    ensure(verdict_of(&miss, &response) == Verdict::Fail, "Expected no matching node to fail")?;
    ensure(
        verdict_of(&miss.negate(), &response) == Verdict::Pass,
        "Expected the negated miss to pass as universal non-match",
    )?;
    Ok(())
}

/// Tests indexed node matching.
#[test]
fn test_node_indexed_match() -> TestResult {
    let response = response(json!({"posts": {"nodes": [{"id": "X"}, {"id": "Y"}]}}));

    let fields = ElementMatching::fields(json!({"id": "Y"})).map_err(|err| err.to_string())?;
    let at_one = Expectation::node_at("posts.nodes", fields.clone(), 1)
        .map_err(|err| err.to_string())?;
    ensure(verdict_of(&at_one, &response) == Verdict::Pass, "Expected index 1 to match")?;

    let at_zero =
        Expectation::node_at("posts.nodes", fields.clone(), 0).map_err(|err| err.to_string())?;
    ensure(
        verdict_of(&at_zero, &response) == Verdict::Fail,
        "Expected index 0 to fail for the other node",
    )?;

    let out_of_bounds =
        Expectation::node_at("posts.nodes", fields, 9).map_err(|err| err.to_string())?;
    ensure(
        verdict_of(&out_of_bounds, &response) == Verdict::Fail,
        "Expected an out-of-bounds index to fail",
    )?;
    Ok(())
}

/// Tests nested expectations inside node matching.
#[test]
fn test_node_nested_expectations() -> TestResult {
    let response = response(json!({
        "posts": {"nodes": [
            {"databaseId": 7, "categories": {"nodes": [{"databaseId": 21}]}},
            {"databaseId": 8, "categories": {"nodes": []}}
        ]}
    }));

    let nested = ElementMatching::expectations(vec![
        Expectation::object("databaseId", ValueCheck::Equals(json!(7)))
            .map_err(|err| err.to_string())?,
        Expectation::node_at(
            "categories.nodes",
            ElementMatching::fields(json!({"databaseId": 21})).map_err(|err| err.to_string())?,
            0,
        )
        .map_err(|err| err.to_string())?,
    ]);
    let expectation = Expectation::node("posts.nodes", nested).map_err(|err| err.to_string())?;
    ensure(
        verdict_of(&expectation, &response) == Verdict::Pass,
        "Expected the first node to satisfy both nested checks",
    )?;
    Ok(())
}

/// Tests node matching on a non-list path.
#[test]
fn test_node_on_non_list() -> TestResult {
    let response = response(json!({"posts": {"nodes": {"id": "X"}}}));

    let fields = ElementMatching::fields(json!({"id": "X"})).map_err(|err| err.to_string())?;
    let expectation = Expectation::node("posts.nodes", fields).map_err(|err| err.to_string())?;
    ensure(
        verdict_of(&expectation, &response) == Verdict::Fail,
        "Expected node matching against a non-list to fail",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Edge Matching
// ============================================================================

/// Tests edge matching unwraps the node member.
#[test]
fn test_edge_unwraps_node() -> TestResult {
    let response = response(json!({
        "posts": {"edges": [
            {"node": {"databaseId": 7, "categories": {"edges": [{"node": {"databaseId": 21}}]}}}
        ]}
    }));

    let nested = ElementMatching::expectations(vec![
        Expectation::object("databaseId", ValueCheck::Equals(json!(7)))
            .map_err(|err| err.to_string())?,
        Expectation::edge(
            "categories.edges",
            ElementMatching::fields(json!({"databaseId": 21})).map_err(|err| err.to_string())?,
        )
        .map_err(|err| err.to_string())?,
    ]);
    let expectation =
        Expectation::edge_at("posts.edges", nested, 0).map_err(|err| err.to_string())?;
    ensure(
        verdict_of(&expectation, &response) == Verdict::Pass,
        "Expected edge matching to address the wrapped node",
    )?;
    Ok(())
}

/// Tests edge elements without a node member fail.
#[test]
fn test_edge_without_node_member() -> TestResult {
    let response = response(json!({"posts": {"edges": [{"cursor": "abc"}]}}));

    let fields = ElementMatching::fields(json!({"databaseId": 7})).map_err(|err| err.to_string())?;
    let expectation = Expectation::edge("posts.edges", fields).map_err(|err| err.to_string())?;
    ensure(
        verdict_of(&expectation, &response) == Verdict::Fail,
        "Expected an edge without a node member to fail",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Error Matching
// ============================================================================

/// Builds a response with one pathed error.
fn error_response() -> QueryResponse {
    QueryResponse {
        data: Some(json!({"testFailingType": {"try": null}})),
        errors: vec![
            ResponseError::new("testErrorQuery worked as expected").with_path(vec![
                ErrorPathSegment::Field("testFailingType".to_string()),
                ErrorPathSegment::Field("try".to_string()),
            ]),
        ],
        extensions: None,
    }
}

/// Tests error path suffix matching.
#[test]
fn test_error_path_suffix_match() -> TestResult {
    let response = error_response();

    let full =
        Expectation::error_path("testFailingType.try").map_err(|err| err.to_string())?;
    let suffix = Expectation::error_path("try").map_err(|err| err.to_string())?;
    let miss = Expectation::error_path("testFailingType.trying").map_err(|err| err.to_string())?;

    ensure(verdict_of(&full, &response) == Verdict::Pass, "Expected the full path to match")?;
    ensure(verdict_of(&suffix, &response) == Verdict::Pass, "Expected a path suffix to match")?;
    ensure(verdict_of(&miss, &response) == Verdict::Fail, "Expected a different path to fail")?;
    Ok(())
}

/// Tests error message match modes.
#[test]
fn test_error_message_modes() -> TestResult {
    let response = error_response();

    let cases = [
        ("testErrorQuery worked as expected", MessageMatch::Equals, Verdict::Pass),
        ("worked as", MessageMatch::Contains, Verdict::Pass),
        ("testErrorQuery worked", MessageMatch::StartsWith, Verdict::Pass),
        ("as expected", MessageMatch::EndsWith, Verdict::Pass),
        ("worked as", MessageMatch::Equals, Verdict::Fail),
        ("as expected", MessageMatch::StartsWith, Verdict::Fail),
        ("testErrorQuery worked", MessageMatch::EndsWith, Verdict::Fail),
        ("entirely different", MessageMatch::Contains, Verdict::Fail),
    ];

    for (needle, mode, expected) in cases {
        let expectation = Expectation::error_message(needle, mode);
        ensure(
            verdict_of(&expectation, &response) == expected,
            "Expected the message match mode to behave positionally",
        )?;
    }
    Ok(())
}

/// Tests index path segments in error paths.
#[test]
fn test_error_path_with_index() -> TestResult {
    let response = QueryResponse {
        data: None,
        errors: vec![ResponseError::new("boom").with_path(vec![
            ErrorPathSegment::Field("posts".to_string()),
            ErrorPathSegment::Index(2),
            ErrorPathSegment::Field("title".to_string()),
        ])],
        extensions: None,
    };

    let hit = Expectation::error_path("posts.2.title").map_err(|err| err.to_string())?;
    let miss = Expectation::error_path("posts.1.title").map_err(|err| err.to_string())?;
    ensure(verdict_of(&hit, &response) == Verdict::Pass, "Expected index segments to match")?;
    ensure(verdict_of(&miss, &response) == Verdict::Fail, "Expected index mismatch to fail")?;
    Ok(())
}

// system-tests/src/fixtures/mod.rs
// ============================================================================
// Module: System Test Fixtures
// Description: Scripted blog schema and failing-type fixtures.
// Purpose: Give every suite the same deterministic content to query.
// Dependencies: gql-check-core, gql-check-harness, serde_json
// ============================================================================

//! ## Overview
//! The blog fixture scripts a small connection-based schema: two posts,
//! one category attached to the first post, relay identifiers throughout,
//! and both `nodes` and `edges` shapes. The failing-type fixture registers
//! resolvers that error on demand so suites can exercise error paths.

// ============================================================================
// SECTION: Imports
// ============================================================================

use gql_check_core::FieldDef;
use gql_check_core::ObjectTypeDef;
use gql_check_core::RelayId;
use gql_check_core::ResolverError;
use gql_check_core::SchemaRegistry as _;
use gql_check_harness::OperationPlan;
use gql_check_harness::ROOT_TYPE_NAME;
use gql_check_harness::ScriptedExecutor;
use gql_check_harness::Selection;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Dataset
// ============================================================================

/// Database id of the first fixture post.
pub const POST_ONE_ID: u64 = 7;
/// Database id of the second fixture post.
pub const POST_TWO_ID: u64 = 8;
/// Database id of the fixture category.
pub const CATEGORY_ID: u64 = 21;

/// Encodes a relay id for a fixture object.
///
/// # Errors
///
/// Returns a description when the type name is rejected.
pub fn relay_id(type_name: &str, database_id: u64) -> Result<String, String> {
    RelayId::new(type_name, database_id)
        .map(|id| id.encode())
        .map_err(|err| err.to_string())
}

/// Builds the category connection attached to the first post.
fn category_connection() -> Result<Value, String> {
    let category = json!({
        "id": relay_id("category", CATEGORY_ID)?,
        "databaseId": CATEGORY_ID,
        "name": "News"
    });
    Ok(json!({
        "nodes": [category.clone()],
        "edges": [{"node": category}]
    }))
}

/// Builds one fixture post value with its category connection.
fn post_value(database_id: u64, title: &str) -> Result<Value, String> {
    let categories = if database_id == POST_ONE_ID {
        category_connection()?
    } else {
        json!({"nodes": [], "edges": []})
    };
    Ok(json!({
        "id": relay_id("post", database_id)?,
        "databaseId": database_id,
        "title": title,
        "categories": categories
    }))
}

// ============================================================================
// SECTION: Blog Fixture
// ============================================================================

/// Builds the scripted blog executor with its standard operations.
///
/// Registered operations: `postAndPosts` (single post by relay id plus the
/// post list), `postsWithCategories` (nodes shape), and `postsEdges`
/// (edges shape).
///
/// # Errors
///
/// Returns a description when fixture registration fails.
pub fn blog_executor() -> Result<ScriptedExecutor, String> {
    let mut executor = ScriptedExecutor::new();

    let posts = vec![
        post_value(POST_ONE_ID, "Hello world")?,
        post_value(POST_TWO_ID, "Second post")?,
    ];

    let by_id = posts.clone();
    executor
        .registry_mut()
        .register_field(
            ROOT_TYPE_NAME,
            "post",
            FieldDef::new(move |context| {
                let wanted = context.string_arg("id").unwrap_or_default();
                by_id
                    .iter()
                    .find(|post| post.get("id").and_then(Value::as_str) == Some(wanted))
                    .cloned()
                    .ok_or_else(|| ResolverError::new(format!("post not found: {wanted}")))
            }),
        )
        .map_err(|err| err.to_string())?;

    let listed = posts;
    executor
        .registry_mut()
        .register_field(
            ROOT_TYPE_NAME,
            "posts",
            FieldDef::new(move |_context| {
                let edges: Vec<Value> =
                    listed.iter().map(|post| json!({"node": post})).collect();
                Ok(json!({"nodes": listed.clone(), "edges": edges}))
            }),
        )
        .map_err(|err| err.to_string())?;

    executor.register_operation(
        "postAndPosts",
        OperationPlan::new(vec![
            Selection::field("post")
                .with_var("id", "id")
                .with_nested(Selection::field("id"))
                .with_nested(Selection::field("databaseId")),
            Selection::field("posts")
                .with_nested(Selection::field("nodes").with_nested(Selection::field("id"))),
        ]),
    );

    executor.register_operation(
        "postsWithCategories",
        OperationPlan::new(vec![Selection::field("posts").with_nested(
            Selection::field("nodes")
                .with_nested(Selection::field("databaseId"))
                .with_nested(Selection::field("categories").with_nested(
                    Selection::field("nodes").with_nested(Selection::field("databaseId")),
                )),
        )]),
    );

    executor.register_operation(
        "postsEdges",
        OperationPlan::new(vec![Selection::field("posts").with_nested(
            Selection::field("edges").with_nested(
                Selection::field("node")
                    .with_nested(Selection::field("databaseId"))
                    .with_nested(Selection::field("categories").with_nested(
                        Selection::field("edges").with_nested(
                            Selection::field("node").with_nested(Selection::field("databaseId")),
                        ),
                    )),
            ),
        )]),
    );

    Ok(executor)
}

// ============================================================================
// SECTION: Failing Fixture
// ============================================================================

/// Builds the failing-type executor used by error-path suites.
///
/// The `try` field errors when its `fail` argument is true; `trying`
/// errors likewise and otherwise returns a list of strings. One operation,
/// `failing`, selects both with the `fail1`/`fail2` variables.
///
/// # Errors
///
/// Returns a description when fixture registration fails.
pub fn failing_executor() -> Result<ScriptedExecutor, String> {
    let mut executor = ScriptedExecutor::new();

    let type_def = ObjectTypeDef::new()
        .with_field(
            "try",
            FieldDef::new(|context| {
                if context.bool_arg("fail") {
                    return Err(ResolverError::new("testErrorQuery worked as expected"));
                }
                Ok(json!("No fails here"))
            }),
        )
        .with_field(
            "trying",
            FieldDef::new(|context| {
                if context.bool_arg("fail") {
                    return Err(ResolverError::new("testErrorQuery list failed as expected"));
                }
                Ok(json!(["No", "fails", "here", "either"]))
            }),
        );
    executor
        .registry_mut()
        .register_object_type("FailingType", type_def)
        .map_err(|err| err.to_string())?;
    executor
        .registry_mut()
        .register_field(
            ROOT_TYPE_NAME,
            "testFailingType",
            FieldDef::new(|_context| Ok(json!({}))).returning("FailingType"),
        )
        .map_err(|err| err.to_string())?;

    executor.register_operation(
        "failing",
        OperationPlan::new(vec![
            Selection::field("testFailingType")
                .with_nested(Selection::field("try").with_var("fail", "fail1"))
                .with_nested(Selection::field("trying").with_var("fail", "fail2")),
        ]),
    );

    Ok(executor)
}

// crates/gql-check-core/src/core/response.rs
// ============================================================================
// Module: Query Response Model
// Description: Typed model for GraphQL execution results.
// Purpose: Give expectations a stable view of `data` and `errors`.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`QueryResponse`] is the parsed result of executing one query: an
//! optional `data` tree plus an ordered list of [`ResponseError`] records
//! (message, path, locations). The model follows the GraphQL response
//! format but does not interpret it; executor payloads are untrusted and
//! anything that fails to deserialize is an executor error, not a panic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Error Records
// ============================================================================

/// One segment of an error's response path.
///
/// # Invariants
/// - Serializes as a bare string or number, matching the GraphQL response
///   format for `errors[].path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorPathSegment {
    /// Field name segment.
    Field(String),
    /// List index segment.
    Index(usize),
}

impl fmt::Display for ErrorPathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => name.fmt(f),
            Self::Index(index) => index.fmt(f),
        }
    }
}

/// Source location attached to an error record.
///
/// # Invariants
/// - `line` and `column` are 1-based per the GraphQL response format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    /// 1-based line in the query document.
    pub line: u32,
    /// 1-based column in the query document.
    pub column: u32,
}

/// One entry of a response's `errors` list.
///
/// # Invariants
/// - `message` is always present; `path` and `locations` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    /// Human-readable error message.
    pub message: String,
    /// Response path of the field that errored, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<ErrorPathSegment>,
    /// Query-document locations associated with the error.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,
    /// Implementation-specific error extensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl ResponseError {
    /// Creates an error record with only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
            locations: Vec::new(),
            extensions: None,
        }
    }

    /// Returns the same record with the given response path.
    #[must_use]
    pub fn with_path(mut self, path: Vec<ErrorPathSegment>) -> Self {
        self.path = path;
        self
    }

    /// Renders the error path as a dotted string for diagnostics.
    #[must_use]
    pub fn path_display(&self) -> String {
        let segments: Vec<String> =
            self.path.iter().map(std::string::ToString::to_string).collect();
        segments.join(".")
    }
}

// ============================================================================
// SECTION: Query Response
// ============================================================================

/// Parsed result of executing one GraphQL query.
///
/// # Invariants
/// - `errors` order is preserved from the executor payload.
/// - `data` is `None` when the executor returned no `data` member or an
///   explicit JSON null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryResponse {
    /// Response data tree, if execution produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Ordered execution errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
    /// Implementation-specific response extensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl QueryResponse {
    /// Creates a successful response from a data tree.
    #[must_use]
    pub const fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
            extensions: None,
        }
    }

    /// Parses a response from an executor's JSON payload.
    ///
    /// An explicit `"data": null` member is treated as absent data.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the payload does not match
    /// the GraphQL response format.
    pub fn from_json(payload: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(payload)
    }

    /// Returns true when the response carries at least one error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns every error message, in response order.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.message.clone()).collect()
    }
}

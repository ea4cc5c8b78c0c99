// crates/gql-check-core/src/core/expectation.rs
// ============================================================================
// Module: Expectations
// Description: Declarative assertion units over query responses.
// Purpose: Model object, connection, and error expectations as plain data.
// Dependencies: crate::core::path, serde, serde_json
// ============================================================================

//! ## Overview
//! An [`Expectation`] is one declarative assertion evaluated against a
//! single response: a value check at a path, a node/edge connection match,
//! or an error-list predicate. Expectations are constructed per test,
//! evaluated once by [`crate::runtime`], and discarded.
//!
//! Value checks are an explicit three-way enum ([`ValueCheck`]) rather
//! than sentinel values: `Exists` asserts presence regardless of value,
//! `IsNull` asserts the JSON null exactly, and `Equals` asserts deep
//! equality. Negation is uniform: [`Expectation::negate`] inverts exactly
//! the outcome of the wrapped expectation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::path::FieldPath;
use crate::core::path::PathError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while constructing expectations.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpectationError {
    /// The expectation path failed to parse.
    #[error(transparent)]
    Path(#[from] PathError),
    /// A field map was not a non-empty JSON object.
    #[error("field matching requires a non-empty JSON object, got {actual}")]
    InvalidFieldMap {
        /// Short description of the offending value.
        actual: String,
    },
}

// ============================================================================
// SECTION: Value Checks
// ============================================================================

/// Check applied to the value resolved at an expectation's path.
///
/// # Invariants
/// - Variants are mutually exclusive; one check per object expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCheck {
    /// The path must resolve to a present value, JSON null included.
    Exists,
    /// The resolved value must be the JSON null exactly.
    IsNull,
    /// The resolved value must deeply equal the given value.
    Equals(Value),
}

impl fmt::Display for ValueCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exists => write!(f, "exists"),
            Self::IsNull => write!(f, "is null"),
            Self::Equals(value) => write!(f, "equals {value}"),
        }
    }
}

// ============================================================================
// SECTION: Message Matching
// ============================================================================

/// Position of a substring match against an error message.
///
/// # Invariants
/// - Modes are mutually exclusive per expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageMatch {
    /// The message must equal the needle exactly.
    Equals,
    /// The message must contain the needle anywhere.
    Contains,
    /// The message must start with the needle.
    StartsWith,
    /// The message must end with the needle.
    EndsWith,
}

impl MessageMatch {
    /// Returns true when `message` satisfies this mode for `needle`.
    #[must_use]
    pub fn matches(self, needle: &str, message: &str) -> bool {
        match self {
            Self::Equals => message == needle,
            Self::Contains => message.contains(needle),
            Self::StartsWith => message.starts_with(needle),
            Self::EndsWith => message.ends_with(needle),
        }
    }
}

impl fmt::Display for MessageMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals => write!(f, "equals"),
            Self::Contains => write!(f, "contains"),
            Self::StartsWith => write!(f, "starts with"),
            Self::EndsWith => write!(f, "ends with"),
        }
    }
}

// ============================================================================
// SECTION: Element Matching
// ============================================================================

/// Checks applied to one element of a connection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementMatching {
    /// Flat field map; each entry is an equality check against the element.
    Fields(BTreeMap<String, Value>),
    /// Nested expectations resolved relative to the element.
    Expectations(Vec<Expectation>),
}

impl ElementMatching {
    /// Builds a flat field map from a JSON object value.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectationError::InvalidFieldMap`] when the value is not
    /// a non-empty JSON object.
    pub fn fields(value: Value) -> Result<Self, ExpectationError> {
        match value {
            Value::Object(map) if !map.is_empty() => Ok(Self::Fields(map.into_iter().collect())),
            other => Err(ExpectationError::InvalidFieldMap {
                actual: json_kind(&other).to_string(),
            }),
        }
    }

    /// Builds nested expectations for element matching.
    #[must_use]
    pub const fn expectations(expectations: Vec<Expectation>) -> Self {
        Self::Expectations(expectations)
    }
}

/// Names a JSON value's kind for diagnostics.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// SECTION: Expectation Kinds
// ============================================================================

/// Connection-list expectation body shared by node and edge matching.
///
/// # Invariants
/// - `index`, when present, targets exactly one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionExpectation {
    /// Path to the connection list.
    pub path: FieldPath,
    /// Checks applied to candidate elements.
    pub matching: ElementMatching,
    /// Optional explicit element index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// The assertion payload of an expectation.
///
/// # Invariants
/// - Variants are stable for serialization and authored expectation files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectationKind {
    /// Value check at a path in `data`.
    Object {
        /// Path to the checked value.
        path: FieldPath,
        /// Check applied to the resolved value.
        check: ValueCheck,
    },
    /// Connection match where list elements are the nodes themselves.
    Node(ConnectionExpectation),
    /// Connection match where list elements wrap the node in an edge.
    Edge(ConnectionExpectation),
    /// At least one response error's path must end with the given path.
    ErrorPath {
        /// Expected error-path suffix.
        path: FieldPath,
    },
    /// At least one response error's message must satisfy the match mode.
    ErrorMessage {
        /// Needle compared against error messages.
        needle: String,
        /// Position of the match.
        mode: MessageMatch,
    },
}

// ============================================================================
// SECTION: Expectation
// ============================================================================

/// One declarative assertion against a query response.
///
/// # Invariants
/// - `negated` inverts exactly the outcome of `kind`, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    /// The assertion payload.
    pub kind: ExpectationKind,
    /// Whether the outcome is inverted.
    #[serde(default)]
    pub negated: bool,
}

impl Expectation {
    /// Creates an object expectation checking the value at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectationError`] when the path string is malformed.
    pub fn object(path: &str, check: ValueCheck) -> Result<Self, ExpectationError> {
        Ok(Self::from_kind(ExpectationKind::Object {
            path: FieldPath::parse(path)?,
            check,
        }))
    }

    /// Creates a node expectation matched existentially over the list.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectationError`] when the path string is malformed.
    pub fn node(path: &str, matching: ElementMatching) -> Result<Self, ExpectationError> {
        Ok(Self::from_kind(ExpectationKind::Node(ConnectionExpectation {
            path: FieldPath::parse(path)?,
            matching,
            index: None,
        })))
    }

    /// Creates a node expectation targeting exactly one list element.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectationError`] when the path string is malformed.
    pub fn node_at(
        path: &str,
        matching: ElementMatching,
        index: usize,
    ) -> Result<Self, ExpectationError> {
        Ok(Self::from_kind(ExpectationKind::Node(ConnectionExpectation {
            path: FieldPath::parse(path)?,
            matching,
            index: Some(index),
        })))
    }

    /// Creates an edge expectation matched existentially over the list.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectationError`] when the path string is malformed.
    pub fn edge(path: &str, matching: ElementMatching) -> Result<Self, ExpectationError> {
        Ok(Self::from_kind(ExpectationKind::Edge(ConnectionExpectation {
            path: FieldPath::parse(path)?,
            matching,
            index: None,
        })))
    }

    /// Creates an edge expectation targeting exactly one list element.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectationError`] when the path string is malformed.
    pub fn edge_at(
        path: &str,
        matching: ElementMatching,
        index: usize,
    ) -> Result<Self, ExpectationError> {
        Ok(Self::from_kind(ExpectationKind::Edge(ConnectionExpectation {
            path: FieldPath::parse(path)?,
            matching,
            index: Some(index),
        })))
    }

    /// Creates an error-path expectation for the given suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectationError`] when the path string is malformed.
    pub fn error_path(path: &str) -> Result<Self, ExpectationError> {
        Ok(Self::from_kind(ExpectationKind::ErrorPath {
            path: FieldPath::parse(path)?,
        }))
    }

    /// Creates an error-message expectation with the given match mode.
    #[must_use]
    pub fn error_message(needle: impl Into<String>, mode: MessageMatch) -> Self {
        Self::from_kind(ExpectationKind::ErrorMessage {
            needle: needle.into(),
            mode,
        })
    }

    /// Inverts the outcome of this expectation.
    #[must_use]
    pub const fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Returns the path addressed by this expectation, if any.
    #[must_use]
    pub const fn path(&self) -> Option<&FieldPath> {
        match &self.kind {
            ExpectationKind::Object {
                path, ..
            }
            | ExpectationKind::ErrorPath {
                path,
            } => Some(path),
            ExpectationKind::Node(connection) | ExpectationKind::Edge(connection) => {
                Some(&connection.path)
            }
            ExpectationKind::ErrorMessage {
                ..
            } => None,
        }
    }

    /// Wraps a kind in a non-negated expectation.
    const fn from_kind(kind: ExpectationKind) -> Self {
        Self {
            kind,
            negated: false,
        }
    }
}

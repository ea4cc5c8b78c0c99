// crates/gql-check-core/src/core/report.rs
// ============================================================================
// Module: Failure Reports
// Description: Structured assertion failures and per-run collection.
// Purpose: Surface every mismatch of a run in one report.
// Dependencies: crate::core::path, serde, serde_json
// ============================================================================

//! ## Overview
//! Evaluation never stops at the first mismatch: each failed expectation
//! contributes a [`Failure`] naming the path, the failure kind, and the
//! expected/actual values, and the [`EvaluationReport`] renders all of
//! them at once. Failures are data, so callers can inspect them
//! programmatically before formatting.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::path::FieldPath;

// ============================================================================
// SECTION: Failure Kinds
// ============================================================================

/// Classification of one expectation failure.
///
/// # Invariants
/// - Variants are stable for programmatic handling and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// An intermediate or final path segment did not resolve.
    PathNotFound {
        /// The segment that failed to resolve.
        segment: String,
    },
    /// The resolved value did not deeply equal the expected value.
    Mismatch {
        /// Expected value.
        expected: Value,
        /// Actual resolved value.
        actual: Value,
    },
    /// The resolved value was expected to be JSON null but was not.
    NotNull {
        /// Actual resolved value.
        actual: Value,
    },
    /// The path was expected to resolve to a list.
    NotAList {
        /// Actual resolved value.
        actual: Value,
    },
    /// An explicit element index was outside the list bounds.
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// List length.
        len: usize,
    },
    /// No list element satisfied the nested checks.
    NoMatchingElement {
        /// Number of elements inspected.
        inspected: usize,
    },
    /// A negated expectation matched anyway.
    UnexpectedMatch,
    /// The response carried errors where none were expected.
    ErrorsPresent {
        /// Messages of the unexpected errors.
        messages: Vec<String>,
    },
    /// The response carried no errors where at least one was expected.
    ErrorsAbsent,
    /// No response error satisfied the error expectation.
    NoMatchingError {
        /// Messages of the errors that were inspected.
        candidates: Vec<String>,
    },
}

// ============================================================================
// SECTION: Failure
// ============================================================================

/// One failed expectation with its location and detail.
///
/// # Invariants
/// - `path` is absent only for failures that are not path-addressed
///   (error-message expectations and whole-response checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Path addressed by the failed expectation, if any.
    pub path: Option<FieldPath>,
    /// Failure classification and detail.
    pub kind: FailureKind,
}

impl Failure {
    /// Creates a failure at a path.
    #[must_use]
    pub fn at(path: FieldPath, kind: FailureKind) -> Self {
        Self {
            path: Some(path),
            kind,
        }
    }

    /// Creates a failure that is not path-addressed.
    #[must_use]
    pub const fn whole_response(kind: FailureKind) -> Self {
        Self {
            path: None,
            kind,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "at `{path}`: ")?;
        }
        match &self.kind {
            FailureKind::PathNotFound {
                segment,
            } => {
                write!(f, "segment `{segment}` not found")
            }
            FailureKind::Mismatch {
                expected,
                actual,
            } => {
                write!(f, "expected {expected}, got {actual}")
            }
            FailureKind::NotNull {
                actual,
            } => {
                write!(f, "expected null, got {actual}")
            }
            FailureKind::NotAList {
                actual,
            } => {
                write!(f, "expected a list, got {actual}")
            }
            FailureKind::IndexOutOfBounds {
                index,
                len,
            } => {
                write!(f, "index {index} out of bounds for list of {len}")
            }
            FailureKind::NoMatchingElement {
                inspected,
            } => {
                write!(f, "no element matched ({inspected} inspected)")
            }
            FailureKind::UnexpectedMatch => {
                write!(f, "negated expectation matched")
            }
            FailureKind::ErrorsPresent {
                messages,
            } => {
                write!(f, "expected a clean response, got errors: {}", messages.join("; "))
            }
            FailureKind::ErrorsAbsent => {
                write!(f, "expected response errors, got none")
            }
            FailureKind::NoMatchingError {
                candidates,
            } => {
                if candidates.is_empty() {
                    write!(f, "no response error matched")
                } else {
                    write!(f, "no response error matched; errors were: {}", candidates.join("; "))
                }
            }
        }
    }
}

// ============================================================================
// SECTION: Evaluation Report
// ============================================================================

/// Ordered collection of failures from one evaluation run.
///
/// # Invariants
/// - Failure order matches expectation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EvaluationReport {
    /// Collected failures, in evaluation order.
    failures: Vec<Failure>,
}

impl EvaluationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Records a failure.
    pub fn push(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    /// Appends every failure from another report.
    pub fn merge(&mut self, other: Self) {
        self.failures.extend(other.failures);
    }

    /// Returns the collected failures in evaluation order.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Returns true when no failure was recorded.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of recorded failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true when the report is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "all expectations satisfied");
        }
        writeln!(f, "{} expectation(s) failed:", self.failures.len())?;
        for (index, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {failure}", index + 1)?;
        }
        Ok(())
    }
}

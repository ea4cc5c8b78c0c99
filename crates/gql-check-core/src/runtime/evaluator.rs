// crates/gql-check-core/src/runtime/evaluator.rs
// ============================================================================
// Module: Expectation Evaluator
// Description: Verdict evaluation for expectations against one response.
// Purpose: Convert resolved response values into pass/fail verdicts.
// Dependencies: crate::core, crate::runtime::resolver, match-logic, bigdecimal
// ============================================================================

//! ## Overview
//! The evaluator turns one [`Expectation`] plus a response [`Scope`] into a
//! [`Verdict`]. Value equality is deep and decimal-aware for numbers, so
//! `1` and `1.0` compare equal while strings and booleans stay strict.
//! Connection matching is existential without an index (any element may
//! satisfy the nested checks) and exact with one. Negation inverts the
//! final verdict and nothing else.
//!
//! Evaluation is total: missing paths, wrong shapes, and out-of-bounds
//! indexes yield failing verdicts, never errors or panics. Failure detail
//! for reports is produced by [`evaluate_with_report`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str::FromStr;

use bigdecimal::BigDecimal;
use match_logic::ConditionEval;
use match_logic::Matcher;
use match_logic::Verdict;
use serde_json::Number;
use serde_json::Value;

use crate::core::expectation::ConnectionExpectation;
use crate::core::expectation::ElementMatching;
use crate::core::expectation::Expectation;
use crate::core::expectation::ExpectationKind;
use crate::core::expectation::ValueCheck;
use crate::core::path::FieldPath;
use crate::core::path::PathSegment;
use crate::core::report::EvaluationReport;
use crate::core::report::Failure;
use crate::core::report::FailureKind;
use crate::core::response::ErrorPathSegment;
use crate::core::response::QueryResponse;
use crate::core::response::ResponseError;
use crate::runtime::resolver::Resolution;
use crate::runtime::resolver::resolve;

// ============================================================================
// SECTION: Scope
// ============================================================================

/// Evaluation scope: the data tree expectations resolve against plus the
/// response errors visible to error expectations.
///
/// # Invariants
/// - Element scopes share the response's error list; only `data` narrows.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    /// Data tree for path resolution, if present.
    pub data: Option<&'a Value>,
    /// Response errors, in response order.
    pub errors: &'a [ResponseError],
}

impl<'a> Scope<'a> {
    /// Creates the root scope of a response.
    #[must_use]
    pub fn of_response(response: &'a QueryResponse) -> Self {
        Self {
            data: response.data.as_ref(),
            errors: &response.errors,
        }
    }

    /// Returns a scope narrowed to one list element.
    #[must_use]
    pub const fn element(&self, element: &'a Value) -> Self {
        Self {
            data: Some(element),
            errors: self.errors,
        }
    }
}

impl ConditionEval<Scope<'_>> for Expectation {
    fn eval_condition(&self, context: &Scope<'_>) -> Verdict {
        evaluate(self, context)
    }
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates an expectation to a verdict.
#[must_use]
pub fn evaluate(expectation: &Expectation, scope: &Scope<'_>) -> Verdict {
    let inner = evaluate_kind(&expectation.kind, scope);
    if expectation.negated { inner.negate() } else { inner }
}

/// Evaluates an expectation, recording failure detail in the report.
///
/// The returned verdict accounts for negation; a failing verdict always
/// contributes at least one failure to the report.
pub fn evaluate_with_report(
    expectation: &Expectation,
    scope: &Scope<'_>,
    report: &mut EvaluationReport,
) -> Verdict {
    let inner = evaluate_kind(&expectation.kind, scope);
    let verdict = if expectation.negated { inner.negate() } else { inner };
    if verdict.passed() {
        return verdict;
    }

    if expectation.negated {
        let failure = match expectation.path() {
            Some(path) => Failure::at(path.clone(), FailureKind::UnexpectedMatch),
            None => Failure::whole_response(FailureKind::UnexpectedMatch),
        };
        report.push(failure);
    } else {
        report.push(diagnose(&expectation.kind, scope));
    }
    verdict
}

/// Evaluates the expectation payload, ignoring negation.
fn evaluate_kind(kind: &ExpectationKind, scope: &Scope<'_>) -> Verdict {
    match kind {
        ExpectationKind::Object {
            path,
            check,
        } => evaluate_object(path, check, scope),
        ExpectationKind::Node(connection) => evaluate_connection(connection, false, scope),
        ExpectationKind::Edge(connection) => evaluate_connection(connection, true, scope),
        ExpectationKind::ErrorPath {
            path,
        } => Verdict::any(
            scope.errors.iter().map(|error| error_path_matches(&error.path, path).into()),
        ),
        ExpectationKind::ErrorMessage {
            needle,
            mode,
        } => Verdict::any(
            scope.errors.iter().map(|error| mode.matches(needle, &error.message).into()),
        ),
    }
}

/// Evaluates a value check at a path.
fn evaluate_object(path: &FieldPath, check: &ValueCheck, scope: &Scope<'_>) -> Verdict {
    let Some(data) = scope.data else {
        return Verdict::Fail;
    };
    let resolution = resolve(data, path);
    let values = resolution.values();
    match check {
        ValueCheck::Exists => resolution.found().into(),
        ValueCheck::IsNull => Verdict::any(values.iter().map(|value| value.is_null().into())),
        ValueCheck::Equals(expected) => {
            Verdict::any(values.iter().map(|value| deep_equals(value, expected).into()))
        }
    }
}

/// Evaluates a node or edge connection expectation.
fn evaluate_connection(
    connection: &ConnectionExpectation,
    is_edge: bool,
    scope: &Scope<'_>,
) -> Verdict {
    let Some(elements) = connection_elements(connection, scope) else {
        return Verdict::Fail;
    };

    if let Some(index) = connection.index {
        let Some(element) = elements.get(index) else {
            return Verdict::Fail;
        };
        return element_matches(element, &connection.matching, is_edge, scope);
    }

    Verdict::any(
        elements
            .iter()
            .map(|element| element_matches(element, &connection.matching, is_edge, scope)),
    )
}

/// Resolves the candidate elements of a connection list.
///
/// Fan-out through outer lists concatenates every resolved list; an
/// explicit index always addresses the concatenated sequence.
fn connection_elements<'a>(
    connection: &ConnectionExpectation,
    scope: &Scope<'a>,
) -> Option<Vec<&'a Value>> {
    let data = scope.data?;
    list_elements(&resolve(data, &connection.path))
}

/// Applies element matching to one candidate element.
fn element_matches(
    element: &Value,
    matching: &ElementMatching,
    is_edge: bool,
    scope: &Scope<'_>,
) -> Verdict {
    // Edge elements wrap the node; nested checks address the node object.
    let target = if is_edge {
        match element.get("node") {
            Some(node) => node,
            None => return Verdict::Fail,
        }
    } else {
        element
    };
    let element_scope = scope.element(target);

    match matching {
        ElementMatching::Fields(fields) => Verdict::all(fields.iter().map(|(name, expected)| {
            FieldPath::parse(name).map_or(Verdict::Fail, |path| {
                evaluate_object(&path, &ValueCheck::Equals(expected.clone()), &element_scope)
            })
        })),
        ElementMatching::Expectations(expectations) => {
            let conditions = expectations
                .iter()
                .map(|expectation| Matcher::condition(expectation.clone()))
                .collect();
            Matcher::all_of(conditions).eval(&element_scope)
        }
    }
}

// ============================================================================
// SECTION: Deep Equality
// ============================================================================

/// Compares JSON values deeply, with decimal-aware numeric handling.
#[must_use]
pub fn deep_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left_num), Value::Number(right_num)) => {
            decimal_equals(left_num, right_num)
        }
        (Value::Array(left_items), Value::Array(right_items)) => {
            left_items.len() == right_items.len()
                && left_items
                    .iter()
                    .zip(right_items)
                    .all(|(left_item, right_item)| deep_equals(left_item, right_item))
        }
        (Value::Object(left_map), Value::Object(right_map)) => {
            left_map.len() == right_map.len()
                && left_map.iter().all(|(key, left_value)| {
                    right_map
                        .get(key)
                        .is_some_and(|right_value| deep_equals(left_value, right_value))
                })
        }
        _ => left == right,
    }
}

/// Compares numbers by parsing them into `BigDecimal` values.
fn decimal_equals(left: &Number, right: &Number) -> bool {
    let Some(left) = decimal_from_number(left) else {
        return false;
    };
    let Some(right) = decimal_from_number(right) else {
        return false;
    };
    left == right
}

/// Parses a JSON number into `BigDecimal` with a stable string representation.
fn decimal_from_number(number: &Number) -> Option<BigDecimal> {
    let rendered = number.to_string();
    BigDecimal::from_str(&rendered).ok()
}

// ============================================================================
// SECTION: Error Matching
// ============================================================================

/// Returns true when the error path ends with the expected path.
fn error_path_matches(error_path: &[ErrorPathSegment], expected: &FieldPath) -> bool {
    let expected_segments = expected.segments();
    if expected_segments.len() > error_path.len() {
        return false;
    }
    let tail = &error_path[error_path.len() - expected_segments.len() ..];
    tail.iter().zip(expected_segments).all(|(actual, wanted)| match (actual, wanted) {
        (ErrorPathSegment::Field(actual_name), PathSegment::Field(wanted_name)) => {
            actual_name == wanted_name
        }
        (ErrorPathSegment::Index(actual_index), PathSegment::Index(wanted_index)) => {
            actual_index == wanted_index
        }
        _ => false,
    })
}

// ============================================================================
// SECTION: Failure Diagnosis
// ============================================================================

/// Produces the failure record for a non-negated expectation that failed.
fn diagnose(kind: &ExpectationKind, scope: &Scope<'_>) -> Failure {
    match kind {
        ExpectationKind::Object {
            path,
            check,
        } => diagnose_object(path, check, scope),
        ExpectationKind::Node(connection) | ExpectationKind::Edge(connection) => {
            diagnose_connection(connection, scope)
        }
        ExpectationKind::ErrorPath {
            path,
        } => Failure::at(
            path.clone(),
            FailureKind::NoMatchingError {
                candidates: error_paths(scope.errors),
            },
        ),
        ExpectationKind::ErrorMessage {
            ..
        } => Failure::whole_response(FailureKind::NoMatchingError {
            candidates: scope.errors.iter().map(|error| error.message.clone()).collect(),
        }),
    }
}

/// Diagnoses a failed value check.
fn diagnose_object(path: &FieldPath, check: &ValueCheck, scope: &Scope<'_>) -> Failure {
    let Some(data) = scope.data else {
        return Failure::at(
            path.clone(),
            FailureKind::PathNotFound {
                segment: first_segment_name(path),
            },
        );
    };
    match resolve(data, path) {
        Resolution::NotFound {
            segment,
        } => Failure::at(
            path.clone(),
            FailureKind::PathNotFound {
                segment: segment.to_string(),
            },
        ),
        resolution => {
            let actual = representative_value(&resolution);
            let kind = match check {
                // Exists fails only on unresolved paths, handled above.
                ValueCheck::Exists | ValueCheck::IsNull => FailureKind::NotNull {
                    actual,
                },
                ValueCheck::Equals(expected) => FailureKind::Mismatch {
                    expected: expected.clone(),
                    actual,
                },
            };
            Failure::at(path.clone(), kind)
        }
    }
}

/// Diagnoses a failed connection expectation.
fn diagnose_connection(connection: &ConnectionExpectation, scope: &Scope<'_>) -> Failure {
    let path = connection.path.clone();
    let Some(data) = scope.data else {
        return Failure::at(
            path,
            FailureKind::PathNotFound {
                segment: first_segment_name(&connection.path),
            },
        );
    };
    match resolve(data, &connection.path) {
        Resolution::NotFound {
            segment,
        } => Failure::at(
            path,
            FailureKind::PathNotFound {
                segment: segment.to_string(),
            },
        ),
        resolution => {
            let Some(elements) = list_elements(&resolution) else {
                return Failure::at(
                    path,
                    FailureKind::NotAList {
                        actual: representative_value(&resolution),
                    },
                );
            };
            connection.index.map_or_else(
                || {
                    Failure::at(
                        path.clone(),
                        FailureKind::NoMatchingElement {
                            inspected: elements.len(),
                        },
                    )
                },
                |index| {
                    if index >= elements.len() {
                        Failure::at(
                            path.clone(),
                            FailureKind::IndexOutOfBounds {
                                index,
                                len: elements.len(),
                            },
                        )
                    } else {
                        Failure::at(
                            path.clone(),
                            FailureKind::NoMatchingElement {
                                inspected: 1,
                            },
                        )
                    }
                },
            )
        }
    }
}

/// Collects the list elements of a resolution, if any value is a list.
fn list_elements<'a>(resolution: &Resolution<'a>) -> Option<Vec<&'a Value>> {
    let mut elements = Vec::new();
    let mut saw_list = false;
    for value in resolution.values() {
        if let Value::Array(items) = value {
            saw_list = true;
            elements.extend(items.iter());
        }
    }
    saw_list.then_some(elements)
}

/// Renders a resolution as one representative JSON value for reports.
fn representative_value(resolution: &Resolution<'_>) -> Value {
    match resolution {
        Resolution::One(value) => (*value).clone(),
        Resolution::Many(values) => {
            Value::Array(values.iter().map(|value| (*value).clone()).collect())
        }
        Resolution::NotFound {
            ..
        } => Value::Null,
    }
}

/// Returns the first segment of a path as a string.
fn first_segment_name(path: &FieldPath) -> String {
    path.segments().first().map_or_else(String::new, std::string::ToString::to_string)
}

/// Renders each error's path for failure candidates.
fn error_paths(errors: &[ResponseError]) -> Vec<String> {
    errors.iter().map(ResponseError::path_display).collect()
}

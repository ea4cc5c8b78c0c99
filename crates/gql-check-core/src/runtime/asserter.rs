// crates/gql-check-core/src/runtime/asserter.rs
// ============================================================================
// Module: Assertion Orchestrator
// Description: Whole-response assertions over expectation sets.
// Purpose: Evaluate every expectation and surface all failures at once.
// Dependencies: crate::core, crate::runtime::evaluator, match-logic
// ============================================================================

//! ## Overview
//! The orchestrator runs a set of expectations against one response.
//! `assert_query_successful` first requires a clean error list, then
//! evaluates every expectation against `data`; `assert_query_error`
//! requires at least one error and lets expectations target both `data`
//! and `errors`. Both evaluate the full set before reporting, so one run
//! surfaces every mismatch rather than the first.
//!
//! The `evaluate_*` forms return the [`EvaluationReport`] directly for
//! callers that inspect failures programmatically; the `assert_*` forms
//! wrap a failing report in [`AssertionFailure`] for use with `?` in
//! tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use match_logic::MatchTrace;
use match_logic::Matcher;
use match_logic::Verdict;
use thiserror::Error;

use crate::core::expectation::Expectation;
use crate::core::report::EvaluationReport;
use crate::core::report::Failure;
use crate::core::report::FailureKind;
use crate::core::response::QueryResponse;
use crate::runtime::evaluator::Scope;
use crate::runtime::evaluator::evaluate_with_report;

// ============================================================================
// SECTION: Assertion Failure
// ============================================================================

/// A failed whole-response assertion carrying its full report.
///
/// # Invariants
/// - The wrapped report contains at least one failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{report}")]
pub struct AssertionFailure {
    /// Report of every failed expectation.
    pub report: EvaluationReport,
}

// ============================================================================
// SECTION: Orchestration
// ============================================================================

/// Evaluates expectations against a response that must be error-free.
///
/// The report lists the unexpected errors, if any, followed by one entry
/// per failed expectation.
#[must_use]
pub fn evaluate_query_successful(
    response: &QueryResponse,
    expectations: &[Expectation],
) -> EvaluationReport {
    let mut report = EvaluationReport::new();
    if response.has_errors() {
        report.push(Failure::whole_response(FailureKind::ErrorsPresent {
            messages: response.error_messages(),
        }));
    }
    evaluate_set(response, expectations, &mut report);
    report
}

/// Evaluates expectations against a response that must carry errors.
///
/// Expectations may target both `data` and `errors`.
#[must_use]
pub fn evaluate_query_error(
    response: &QueryResponse,
    expectations: &[Expectation],
) -> EvaluationReport {
    let mut report = EvaluationReport::new();
    if !response.has_errors() {
        report.push(Failure::whole_response(FailureKind::ErrorsAbsent));
    }
    evaluate_set(response, expectations, &mut report);
    report
}

/// Asserts a successful response satisfying every expectation.
///
/// # Errors
///
/// Returns [`AssertionFailure`] wrapping the full report when the response
/// has errors or any expectation fails.
pub fn assert_query_successful(
    response: &QueryResponse,
    expectations: &[Expectation],
) -> Result<(), AssertionFailure> {
    finish(evaluate_query_successful(response, expectations))
}

/// Asserts an erroring response satisfying every expectation.
///
/// # Errors
///
/// Returns [`AssertionFailure`] wrapping the full report when the response
/// has no errors or any expectation fails.
pub fn assert_query_error(
    response: &QueryResponse,
    expectations: &[Expectation],
) -> Result<(), AssertionFailure> {
    finish(evaluate_query_error(response, expectations))
}

/// Evaluates an expectation set with a verdict trace.
///
/// The trace observes one verdict per expectation, in order, which is how
/// diagnostic tooling inspects outcomes without formatting a report.
pub fn evaluate_with_trace<T>(
    response: &QueryResponse,
    expectations: &[Expectation],
    trace: &mut T,
) -> Verdict
where
    T: MatchTrace<Expectation>,
{
    let scope = Scope::of_response(response);
    let conditions = expectations
        .iter()
        .map(|expectation| Matcher::condition(expectation.clone()))
        .collect();
    Matcher::all_of(conditions).eval_with_trace(&scope, trace)
}

/// Evaluates every expectation into the shared report.
fn evaluate_set(
    response: &QueryResponse,
    expectations: &[Expectation],
    report: &mut EvaluationReport,
) {
    let scope = Scope::of_response(response);
    for expectation in expectations {
        evaluate_with_report(expectation, &scope, report);
    }
}

/// Converts a report into an assertion result.
fn finish(report: EvaluationReport) -> Result<(), AssertionFailure> {
    if report.is_pass() {
        Ok(())
    } else {
        Err(AssertionFailure {
            report,
        })
    }
}

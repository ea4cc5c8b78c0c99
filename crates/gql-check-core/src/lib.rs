// crates/gql-check-core/src/lib.rs
// ============================================================================
// Module: gql-check Core
// Description: Declarative assertion engine for GraphQL query responses.
// Purpose: Resolve response paths, evaluate expectation trees, report failures.
// Dependencies: match-logic, serde, serde_json, thiserror, bigdecimal, base64
// ============================================================================

//! ## Overview
//! This crate is the response-matcher engine behind the gql-check toolkit:
//! a typed GraphQL response model, a dotted field-path parser, declarative
//! expectations over `data` and `errors`, a path resolver with implicit
//! list fan-out, and an orchestrator that evaluates every expectation and
//! collects all failures before reporting.
//! Invariants:
//! - Evaluation is one-shot and deterministic; expectations hold no state
//!   across responses.
//! - Missing paths surface as assertion failures, never as panics.
//!
//! Responses come from a [`QueryExecutor`] implementation; this crate does
//! not parse GraphQL documents or validate schemas.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::expectation::ConnectionExpectation;
pub use crate::core::expectation::ElementMatching;
pub use crate::core::expectation::Expectation;
pub use crate::core::expectation::ExpectationError;
pub use crate::core::expectation::ExpectationKind;
pub use crate::core::expectation::MessageMatch;
pub use crate::core::expectation::ValueCheck;
pub use crate::core::path::FieldPath;
pub use crate::core::path::PathError;
pub use crate::core::path::PathSegment;
pub use crate::core::relay::RelayId;
pub use crate::core::relay::RelayIdError;
pub use crate::core::report::EvaluationReport;
pub use crate::core::report::Failure;
pub use crate::core::report::FailureKind;
pub use crate::core::response::ErrorLocation;
pub use crate::core::response::ErrorPathSegment;
pub use crate::core::response::QueryResponse;
pub use crate::core::response::ResponseError;
pub use crate::interfaces::ExecutorError;
pub use crate::interfaces::FieldDef;
pub use crate::interfaces::ObjectTypeDef;
pub use crate::interfaces::QueryExecutor;
pub use crate::interfaces::QueryRequest;
pub use crate::interfaces::RegistryError;
pub use crate::interfaces::Resolver;
pub use crate::interfaces::ResolverContext;
pub use crate::interfaces::ResolverError;
pub use crate::interfaces::SchemaRegistry;
pub use crate::runtime::asserter::AssertionFailure;
pub use crate::runtime::asserter::assert_query_error;
pub use crate::runtime::asserter::assert_query_successful;
pub use crate::runtime::asserter::evaluate_query_error;
pub use crate::runtime::asserter::evaluate_query_successful;
pub use crate::runtime::asserter::evaluate_with_trace;
pub use crate::runtime::evaluator::Scope;
pub use crate::runtime::evaluator::deep_equals;
pub use crate::runtime::evaluator::evaluate;
pub use crate::runtime::evaluator::evaluate_with_report;
pub use crate::runtime::resolver::Resolution;
pub use crate::runtime::resolver::resolve;

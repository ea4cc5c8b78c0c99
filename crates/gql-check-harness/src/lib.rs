// crates/gql-check-harness/src/lib.rs
// ============================================================================
// Module: gql-check Harness
// Description: Test-fixture executors and field registration utilities.
// Purpose: Provide zero-config collaborators for assertion-engine tests.
// Dependencies: gql-check-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This crate ships the test-side implementations of the core collaborator
//! interfaces: a canned executor serving pre-built responses, a scripted
//! executor that routes registered operations through resolver closures,
//! and a field registry with per-test reset. Executors are deterministic
//! with respect to the request and fail closed on unregistered input.
//! Invariants:
//! - Requests route by operation name through [`ScriptedExecutor`] and by
//!   query text through [`CannedExecutor`].
//! - Resolver errors become response errors with the failing field's path;
//!   they never abort execution.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod canned;
pub mod registry;
pub mod scripted;
pub mod selection;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use canned::CannedExecutor;
pub use registry::FieldRegistry;
pub use registry::ROOT_TYPE_NAME;
pub use scripted::OperationPlan;
pub use scripted::ScriptedExecutor;
pub use selection::ArgValue;
pub use selection::Selection;

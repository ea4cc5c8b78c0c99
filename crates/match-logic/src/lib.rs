// crates/match-logic/src/lib.rs
// ============================================================================
// Module: Match Logic
// Description: Domain-independent verdict algebra and matcher-tree combinators.
// Purpose: Provide reusable pass/fail composition for declarative matching.
// Dependencies: serde, smallvec, ron
// ============================================================================

//! ## Overview
//! This crate provides the boolean core shared by declarative matching
//! engines: a two-state [`Verdict`] with combinator algebra, a generic
//! [`Matcher`] tree (condition, all-of, any-of, at-least, not) evaluated
//! through the [`ConditionEval`] trait, an evaluation trace hook, and a
//! structural validator with depth and member limits.
//! Invariants:
//! - Evaluation is deterministic and side-effect free.
//! - Trees are validated before use when authored from external input.
//!
//! Matcher trees authored as data (RON or JSON) go through
//! [`serde_support`] so structural limits are enforced on load.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod matcher;
pub mod serde_support;
pub mod validate;
pub mod verdict;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::MatchError;
pub use matcher::ConditionEval;
pub use matcher::MatchTrace;
pub use matcher::Matcher;
pub use matcher::RecordingTrace;
pub use validate::MatcherValidator;
pub use verdict::Verdict;

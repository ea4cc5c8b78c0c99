// crates/match-logic/src/matcher.rs
// ============================================================================
// Module: Matcher Trees
// Description: Generic condition trees with boolean composition.
// Purpose: Evaluate declarative matchers against caller-supplied context.
// Dependencies: crate::verdict, serde, smallvec
// ============================================================================

//! ## Overview
//! A [`Matcher`] composes domain conditions with `all_of`, `any_of`,
//! `at_least`, and `not`. The condition type `C` is opaque to this crate;
//! callers implement [`ConditionEval`] against their own context type to
//! supply per-condition verdicts. Evaluation walks the tree depth-first and
//! is total: every condition is evaluated exactly once per pass, so trace
//! output is complete and evaluation cost is independent of outcome order.
//!
//! The optional [`MatchTrace`] hook observes every condition verdict in
//! evaluation order, which is how diagnostic layers collect failure detail
//! without threading reporting state through the tree.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

use crate::verdict::Verdict;

// ============================================================================
// SECTION: Condition Evaluation
// ============================================================================

/// Evaluates a domain condition against a caller-supplied context.
pub trait ConditionEval<Cx: ?Sized> {
    /// Returns the verdict for this condition in the given context.
    fn eval_condition(&self, context: &Cx) -> Verdict;
}

/// Observes condition verdicts during matcher evaluation.
pub trait MatchTrace<C> {
    /// Called once per condition, in evaluation order.
    fn on_condition_evaluated(&mut self, condition: &C, verdict: Verdict);
}

/// Trace sink that discards every observation.
struct NoTrace;

impl<C> MatchTrace<C> for NoTrace {
    fn on_condition_evaluated(&mut self, _condition: &C, _verdict: Verdict) {}
}

/// Trace sink that records condition verdicts in evaluation order.
///
/// # Invariants
/// - Entries are appended only; order matches evaluation order.
#[derive(Debug)]
pub struct RecordingTrace<C> {
    /// Recorded `(condition, verdict)` pairs.
    entries: SmallVec<[(C, Verdict); 8]>,
}

impl<C> Default for RecordingTrace<C> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl<C> RecordingTrace<C> {
    /// Returns the recorded entries in evaluation order.
    #[must_use]
    pub fn entries(&self) -> &[(C, Verdict)] {
        &self.entries
    }
}

impl<C: Clone> MatchTrace<C> for RecordingTrace<C> {
    fn on_condition_evaluated(&mut self, condition: &C, verdict: Verdict) {
        self.entries.push((condition.clone(), verdict));
    }
}

// ============================================================================
// SECTION: Matcher Tree
// ============================================================================

/// Declarative matcher tree over domain conditions.
///
/// # Invariants
/// - `AtLeast.min` is meaningful only up to the member count; validation
///   rejects trees where `min` exceeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matcher<C> {
    /// Leaf condition evaluated through [`ConditionEval`].
    Condition(C),
    /// Passes when every member passes.
    AllOf(Vec<Matcher<C>>),
    /// Passes when any member passes.
    AnyOf(Vec<Matcher<C>>),
    /// Passes when at least `min` members pass.
    AtLeast {
        /// Minimum number of members that must pass.
        min: u8,
        /// Member matchers counted toward `min`.
        members: Vec<Matcher<C>>,
    },
    /// Passes when the inner matcher fails.
    Not(Box<Matcher<C>>),
}

impl<C> Matcher<C> {
    /// Creates a leaf condition matcher.
    #[must_use]
    pub const fn condition(condition: C) -> Self {
        Self::Condition(condition)
    }

    /// Creates an all-of matcher over the members.
    #[must_use]
    pub fn all_of(members: Vec<Self>) -> Self {
        Self::AllOf(members)
    }

    /// Creates an any-of matcher over the members.
    #[must_use]
    pub fn any_of(members: Vec<Self>) -> Self {
        Self::AnyOf(members)
    }

    /// Creates an at-least matcher requiring `min` passing members.
    #[must_use]
    pub fn at_least(min: u8, members: Vec<Self>) -> Self {
        Self::AtLeast {
            min,
            members,
        }
    }

    /// Wraps a matcher in negation.
    #[must_use]
    pub fn negate(matcher: Self) -> Self {
        Self::Not(Box::new(matcher))
    }

    /// Returns the number of leaf conditions in the tree.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        match self {
            Self::Condition(_) => 1,
            Self::AllOf(members) | Self::AnyOf(members) => {
                members.iter().map(Self::condition_count).sum()
            }
            Self::AtLeast {
                members, ..
            } => members.iter().map(Self::condition_count).sum(),
            Self::Not(inner) => inner.condition_count(),
        }
    }

    /// Evaluates the tree against the context.
    #[must_use]
    pub fn eval<Cx: ?Sized>(&self, context: &Cx) -> Verdict
    where
        C: ConditionEval<Cx>,
    {
        self.eval_with_trace(context, &mut NoTrace)
    }

    /// Evaluates the tree, reporting each condition verdict to the trace.
    ///
    /// Evaluation does not short-circuit, so every condition is observed
    /// exactly once per evaluation.
    pub fn eval_with_trace<Cx: ?Sized, T>(&self, context: &Cx, trace: &mut T) -> Verdict
    where
        C: ConditionEval<Cx>,
        T: MatchTrace<C>,
    {
        match self {
            Self::Condition(condition) => {
                let verdict = condition.eval_condition(context);
                trace.on_condition_evaluated(condition, verdict);
                verdict
            }
            Self::AllOf(members) => {
                let verdicts = Self::eval_members(members, context, trace);
                Verdict::all(verdicts)
            }
            Self::AnyOf(members) => {
                let verdicts = Self::eval_members(members, context, trace);
                Verdict::any(verdicts)
            }
            Self::AtLeast {
                min,
                members,
            } => {
                let verdicts = Self::eval_members(members, context, trace);
                Verdict::at_least(usize::from(*min), verdicts)
            }
            Self::Not(inner) => inner.eval_with_trace(context, trace).negate(),
        }
    }

    /// Evaluates every member, preserving evaluation order.
    fn eval_members<Cx: ?Sized, T>(
        members: &[Self],
        context: &Cx,
        trace: &mut T,
    ) -> SmallVec<[Verdict; 8]>
    where
        C: ConditionEval<Cx>,
        T: MatchTrace<C>,
    {
        members.iter().map(|member| member.eval_with_trace(context, trace)).collect()
    }
}

// crates/match-logic/src/verdict.rs
// ============================================================================
// Module: Verdict Algebra
// Description: Two-state pass/fail outcome with combinator operations.
// Purpose: Give matcher evaluation a small, explicit boolean vocabulary.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Verdict`] is the outcome of one matching step. The algebra mirrors
//! boolean logic (`and`, `or`, `negate`) and adds the collection forms used
//! by matcher trees: `all`, `any`, and `at_least`. Combinators are total;
//! empty collections follow the usual identities (`all` of nothing passes,
//! `any` of nothing fails).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Verdict
// ============================================================================

/// Outcome of evaluating one matcher or condition.
///
/// # Invariants
/// - Variants are stable for serialization and trace records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The condition or matcher was satisfied.
    Pass,
    /// The condition or matcher was not satisfied.
    Fail,
}

impl Verdict {
    /// Returns true when the verdict is [`Verdict::Pass`].
    #[must_use]
    pub const fn passed(self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns the inverted verdict.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Pass => Self::Fail,
            Self::Fail => Self::Pass,
        }
    }

    /// Returns pass when both verdicts pass.
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Pass, Self::Pass) => Self::Pass,
            _ => Self::Fail,
        }
    }

    /// Returns pass when either verdict passes.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Fail, Self::Fail) => Self::Fail,
            _ => Self::Pass,
        }
    }

    /// Returns pass when every verdict in the iterator passes.
    ///
    /// An empty iterator passes.
    #[must_use]
    pub fn all(verdicts: impl IntoIterator<Item = Self>) -> Self {
        Self::from(verdicts.into_iter().all(Self::passed))
    }

    /// Returns pass when any verdict in the iterator passes.
    ///
    /// An empty iterator fails.
    #[must_use]
    pub fn any(verdicts: impl IntoIterator<Item = Self>) -> Self {
        Self::from(verdicts.into_iter().any(Self::passed))
    }

    /// Returns pass when at least `min` verdicts pass.
    #[must_use]
    pub fn at_least(min: usize, verdicts: impl IntoIterator<Item = Self>) -> Self {
        let passed = verdicts.into_iter().filter(|verdict| verdict.passed()).count();
        Self::from(passed >= min)
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value { Self::Pass } else { Self::Fail }
    }
}

impl From<Verdict> for bool {
    fn from(value: Verdict) -> Self {
        value.passed()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

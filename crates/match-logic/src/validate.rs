// crates/match-logic/src/validate.rs
// ============================================================================
// Module: Matcher Validation
// Description: Structural limits for matcher trees.
// Purpose: Reject malformed or oversized trees before evaluation.
// Dependencies: crate::error, crate::matcher
// ============================================================================

//! ## Overview
//! Matcher trees may be authored as data, so structure is validated before
//! use: combinator nodes must have members, `at_least` minimums must be
//! satisfiable, and depth and member counts are bounded. Limits exist
//! because authored input is untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::MatchError;
use crate::matcher::Matcher;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum supported nesting depth for matcher trees.
const MAX_MATCHER_DEPTH: usize = 32;
/// Maximum members allowed per combinator node.
const MAX_MATCHER_MEMBERS: usize = 256;

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Structural validator for matcher trees.
///
/// # Invariants
/// - `max_depth` and `max_members` are hard upper bounds, never advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherValidator {
    /// Maximum nesting depth.
    max_depth: usize,
    /// Maximum members per combinator node.
    max_members: usize,
}

impl MatcherValidator {
    /// Creates a validator with explicit limits.
    #[must_use]
    pub const fn new(max_depth: usize, max_members: usize) -> Self {
        Self {
            max_depth,
            max_members,
        }
    }

    /// Creates a validator with the crate default limits.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self::new(MAX_MATCHER_DEPTH, MAX_MATCHER_MEMBERS)
    }

    /// Validates the tree structure.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] for empty combinators, unsatisfiable
    /// `at_least` minimums, or exceeded depth/member limits.
    pub fn validate<C>(&self, matcher: &Matcher<C>) -> Result<(), MatchError> {
        self.validate_at_depth(matcher, 1)
    }

    /// Validates one node and recurses into members.
    fn validate_at_depth<C>(&self, matcher: &Matcher<C>, depth: usize) -> Result<(), MatchError> {
        if depth > self.max_depth {
            return Err(MatchError::NestingTooDeep {
                max_depth: self.max_depth,
                actual_depth: depth,
            });
        }

        match matcher {
            Matcher::Condition(_) => Ok(()),
            Matcher::AllOf(members) => self.validate_members("all_of", members, depth),
            Matcher::AnyOf(members) => self.validate_members("any_of", members, depth),
            Matcher::AtLeast {
                min,
                members,
            } => {
                if usize::from(*min) > members.len() {
                    return Err(MatchError::GroupTooSmall {
                        min: *min,
                        members: members.len(),
                    });
                }
                self.validate_members("at_least", members, depth)
            }
            Matcher::Not(inner) => self.validate_at_depth(inner, depth + 1),
        }
    }

    /// Validates a combinator's member list.
    fn validate_members<C>(
        &self,
        operator: &'static str,
        members: &[Matcher<C>],
        depth: usize,
    ) -> Result<(), MatchError> {
        if members.is_empty() {
            return Err(MatchError::EmptyMembers {
                operator: operator.to_string(),
            });
        }
        if members.len() > self.max_members {
            return Err(MatchError::TooManyMembers {
                max_members: self.max_members,
                actual_members: members.len(),
            });
        }
        for member in members {
            self.validate_at_depth(member, depth + 1)?;
        }
        Ok(())
    }
}

impl Default for MatcherValidator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

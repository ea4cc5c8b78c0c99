// crates/match-logic/src/error.rs
// ============================================================================
// Module: Match Errors
// Description: Structural and authoring errors for matcher trees.
// Purpose: Give authoring and validation failures stable, actionable forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`MatchError`] covers the failures that can occur while authoring or
//! validating a matcher tree. Evaluation itself is total and never errors;
//! these variants exist so trees loaded from external input are rejected
//! with diagnostics a test author can act on.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors raised by matcher validation and authoring helpers.
///
/// # Invariants
/// - Variants are stable for programmatic handling and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchError {
    /// A combinator node had no members.
    EmptyMembers {
        /// Combinator name (`all_of`, `any_of`, or `at_least`).
        operator: String,
    },
    /// An at-least node required more passes than it has members.
    GroupTooSmall {
        /// Minimum passes required.
        min: u8,
        /// Number of members present.
        members: usize,
    },
    /// The tree exceeded the validator's depth limit.
    NestingTooDeep {
        /// Maximum allowed depth.
        max_depth: usize,
        /// Depth at which the limit was exceeded.
        actual_depth: usize,
    },
    /// A combinator node exceeded the validator's member limit.
    TooManyMembers {
        /// Maximum allowed members per node.
        max_members: usize,
        /// Actual member count.
        actual_members: usize,
    },
    /// Authored input failed to deserialize.
    Deserialize(String),
    /// Any other error.
    Other(String),
}

impl MatchError {
    /// Creates an [`MatchError::Other`] from any displayable value.
    #[must_use]
    pub fn other(message: impl fmt::Display) -> Self {
        Self::Other(message.to_string())
    }

    /// Returns a short message suitable for test-failure output.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyMembers {
                operator,
            } => format!("`{operator}` needs at least one member"),
            Self::GroupTooSmall {
                min,
                members,
            } => {
                format!("at_least needs {min} passing members but only {members} are present")
            }
            Self::NestingTooDeep {
                max_depth, ..
            } => format!("matcher tree is nested deeper than {max_depth} levels"),
            Self::TooManyMembers {
                max_members, ..
            } => format!("matcher node has more than {max_members} members"),
            Self::Deserialize(msg) | Self::Other(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMembers {
                operator,
            } => write!(f, "empty member list for `{operator}`"),
            Self::GroupTooSmall {
                min,
                members,
            } => {
                write!(f, "at_least min {min} exceeds member count {members}")
            }
            Self::NestingTooDeep {
                max_depth,
                actual_depth,
            } => {
                write!(f, "matcher nesting exceeds limit: depth {actual_depth} (max {max_depth})")
            }
            Self::TooManyMembers {
                max_members,
                actual_members,
            } => {
                write!(f, "matcher members exceed limit: {actual_members} (max {max_members})")
            }
            Self::Deserialize(msg) => write!(f, "matcher deserialization failed: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatchError {}

impl From<&str> for MatchError {
    fn from(value: &str) -> Self {
        Self::Other(value.to_string())
    }
}

impl From<String> for MatchError {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

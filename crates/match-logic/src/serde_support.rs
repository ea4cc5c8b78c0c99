// crates/match-logic/src/serde_support.rs
// ============================================================================
// Module: Matcher Authoring Support
// Description: RON and JSON loading for authored matcher trees.
// Purpose: Validate structure on load so malformed trees never evaluate.
// Dependencies: crate::matcher, crate::validate, ron, serde_json
// ============================================================================

//! ## Overview
//! Matcher trees can be authored as RON or JSON documents. Loading always
//! runs [`MatcherValidator`] with default limits, so a tree that parses but
//! violates structural limits is rejected at the boundary instead of
//! misbehaving during evaluation. Authored input is untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::MatchError;
use crate::matcher::Matcher;
use crate::validate::MatcherValidator;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum allowed authored input size in bytes.
const MAX_INPUT_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Parses and validates a matcher tree from RON.
///
/// # Errors
///
/// Returns [`MatchError`] when the input is oversized, fails to parse, or
/// fails structural validation.
pub fn from_ron_str<C: DeserializeOwned>(input: &str) -> Result<Matcher<C>, MatchError> {
    check_input_size(input)?;
    let matcher: Matcher<C> =
        ron::from_str(input).map_err(|err| MatchError::Deserialize(err.to_string()))?;
    MatcherValidator::with_defaults().validate(&matcher)?;
    Ok(matcher)
}

/// Parses and validates a matcher tree from JSON.
///
/// # Errors
///
/// Returns [`MatchError`] when the input is oversized, fails to parse, or
/// fails structural validation.
pub fn from_json_str<C: DeserializeOwned>(input: &str) -> Result<Matcher<C>, MatchError> {
    check_input_size(input)?;
    let matcher: Matcher<C> =
        serde_json::from_str(input).map_err(|err| MatchError::Deserialize(err.to_string()))?;
    MatcherValidator::with_defaults().validate(&matcher)?;
    Ok(matcher)
}

/// Serializes a matcher tree to RON.
///
/// # Errors
///
/// Returns [`MatchError`] when serialization fails.
pub fn to_ron_string<C: Serialize>(matcher: &Matcher<C>) -> Result<String, MatchError> {
    ron::to_string(matcher).map_err(|err| MatchError::other(err))
}

/// Rejects oversized authored input.
fn check_input_size(input: &str) -> Result<(), MatchError> {
    if input.len() > MAX_INPUT_BYTES {
        return Err(MatchError::other(format!(
            "authored matcher exceeds size limit: {} bytes (max {MAX_INPUT_BYTES})",
            input.len()
        )));
    }
    Ok(())
}

// crates/gql-check-core/src/core/relay.rs
// ============================================================================
// Module: Relay Identifiers
// Description: Opaque global identifiers combining type name and database id.
// Purpose: Encode and decode the relay id convention used by fixtures.
// Dependencies: base64, serde
// ============================================================================

//! ## Overview
//! A relay id is an opaque, globally unique identifier that packs a type
//! name and a numeric database id into one base64 string (`post:7` encodes
//! to `cG9zdDo3`). Fixtures use relay ids to reference objects the way
//! connection-based schemas expose them. Decoding validates strictly and
//! fails closed: encoded input is untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while decoding a relay id.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayIdError {
    /// The input was not valid base64.
    #[error("relay id is not valid base64: {0}")]
    InvalidEncoding(String),
    /// The decoded bytes were not valid UTF-8.
    #[error("relay id does not decode to UTF-8")]
    InvalidUtf8,
    /// The decoded string had no `type:id` separator.
    #[error("relay id `{0}` has no `:` separator")]
    MissingSeparator(String),
    /// The type name portion was empty.
    #[error("relay id has an empty type name")]
    EmptyTypeName,
    /// The type name contained the separator character.
    #[error("relay id type name `{0}` contains `:`")]
    InvalidTypeName(String),
    /// The database id portion failed to parse as an unsigned integer.
    #[error("relay id has invalid database id `{0}`")]
    InvalidDatabaseId(String),
}

// ============================================================================
// SECTION: Relay Id
// ============================================================================

/// Decoded relay identifier.
///
/// # Invariants
/// - `type_name` is non-empty and contains no `:`.
/// - `Display` renders the canonical encoded form, which decodes back to
///   the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelayId {
    /// Schema type name (for example `post`).
    type_name: String,
    /// Numeric database identifier.
    database_id: u64,
}

impl RelayId {
    /// Creates a relay id from a type name and database id.
    ///
    /// # Errors
    ///
    /// Returns [`RelayIdError`] when the type name is empty or contains
    /// the separator character.
    pub fn new(type_name: impl Into<String>, database_id: u64) -> Result<Self, RelayIdError> {
        let type_name = type_name.into();
        if type_name.is_empty() {
            return Err(RelayIdError::EmptyTypeName);
        }
        if type_name.contains(':') {
            return Err(RelayIdError::InvalidTypeName(type_name));
        }
        Ok(Self {
            type_name,
            database_id,
        })
    }

    /// Decodes a relay id from its base64 wire form.
    ///
    /// # Errors
    ///
    /// Returns [`RelayIdError`] for invalid base64, non-UTF-8 payloads,
    /// missing separators, empty type names, or non-numeric database ids.
    pub fn decode(encoded: &str) -> Result<Self, RelayIdError> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|err| RelayIdError::InvalidEncoding(err.to_string()))?;
        let decoded = String::from_utf8(bytes).map_err(|_| RelayIdError::InvalidUtf8)?;
        let (type_name, raw_id) = decoded
            .split_once(':')
            .ok_or_else(|| RelayIdError::MissingSeparator(decoded.clone()))?;
        if type_name.is_empty() {
            return Err(RelayIdError::EmptyTypeName);
        }
        let database_id =
            raw_id.parse().map_err(|_| RelayIdError::InvalidDatabaseId(raw_id.to_string()))?;
        Ok(Self {
            type_name: type_name.to_string(),
            database_id,
        })
    }

    /// Encodes the identifier to its base64 wire form.
    #[must_use]
    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.type_name, self.database_id))
    }

    /// Returns the schema type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the numeric database identifier.
    #[must_use]
    pub const fn database_id(&self) -> u64 {
        self.database_id
    }
}

impl fmt::Display for RelayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

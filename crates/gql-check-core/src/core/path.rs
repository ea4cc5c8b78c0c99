// crates/gql-check-core/src/core/path.rs
// ============================================================================
// Module: Field Path Parser
// Description: Dotted response-path parsing with positions and limits.
// Purpose: Turn author-facing path strings into validated segment lists.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Expectations address response values through dotted paths such as
//! `posts.nodes` or `posts.nodes.0.id`. A [`FieldPath`] is the validated
//! form: a non-empty list of [`PathSegment`]s where all-digit segments are
//! explicit list indexes and everything else is a field name. Path strings
//! are author input, so parsing enforces size and depth limits and reports
//! byte positions in [`PathError`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum allowed path input size in bytes.
const MAX_PATH_BYTES: usize = 1024;
/// Maximum supported number of path segments.
const MAX_PATH_SEGMENTS: usize = 32;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors that can occur while parsing a path string.
///
/// # Invariants
/// - None. Variants capture structured parse failures with byte positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Input was empty or contained only whitespace.
    EmptyInput,
    /// Input exceeded the configured size limit.
    InputTooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual input length in bytes.
        actual_bytes: usize,
    },
    /// Input exceeded the configured segment limit.
    TooManySegments {
        /// Maximum allowed segments.
        max_segments: usize,
        /// Actual segment count.
        actual_segments: usize,
    },
    /// A segment between dots was empty.
    EmptySegment {
        /// Byte offset of the empty segment.
        position: usize,
    },
    /// A numeric segment failed to parse as a list index.
    InvalidIndex {
        /// The raw segment text.
        raw: String,
        /// Byte offset of the segment.
        position: usize,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "path is empty"),
            Self::InputTooLarge {
                max_bytes,
                actual_bytes,
            } => {
                write!(f, "path exceeds size limit: {actual_bytes} bytes (max {max_bytes})")
            }
            Self::TooManySegments {
                max_segments,
                actual_segments,
            } => {
                write!(
                    f,
                    "path exceeds segment limit: {actual_segments} segments (max {max_segments})"
                )
            }
            Self::EmptySegment {
                position,
            } => {
                write!(f, "empty path segment at {position}")
            }
            Self::InvalidIndex {
                raw,
                position,
            } => {
                write!(f, "invalid list index `{raw}` at {position}")
            }
        }
    }
}

impl std::error::Error for PathError {}

// ============================================================================
// SECTION: Segments
// ============================================================================

/// One segment of a dotted field path.
///
/// # Invariants
/// - `Field` names are non-empty and contain no dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object field lookup by name.
    Field(String),
    /// Explicit list index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => name.fmt(f),
            Self::Index(index) => index.fmt(f),
        }
    }
}

// ============================================================================
// SECTION: Field Path
// ============================================================================

/// Validated dotted path into a response tree.
///
/// # Invariants
/// - Contains at least one segment.
/// - `Display` renders the canonical dotted form, which re-parses to the
///   same path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    /// Ordered path segments, outermost first.
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Parses a dotted path string.
    ///
    /// All-digit segments become [`PathSegment::Index`]; any other
    /// non-empty segment is a field name.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] for empty input, empty segments, oversized
    /// input, too many segments, or numeric segments that overflow.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.len() > MAX_PATH_BYTES {
            return Err(PathError::InputTooLarge {
                max_bytes: MAX_PATH_BYTES,
                actual_bytes: input.len(),
            });
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyInput);
        }

        let mut segments = Vec::new();
        let mut position = 0;
        for raw in trimmed.split('.') {
            if raw.is_empty() {
                return Err(PathError::EmptySegment {
                    position,
                });
            }
            if raw.bytes().all(|byte| byte.is_ascii_digit()) {
                let index = raw.parse().map_err(|_| PathError::InvalidIndex {
                    raw: raw.to_string(),
                    position,
                })?;
                segments.push(PathSegment::Index(index));
            } else {
                segments.push(PathSegment::Field(raw.to_string()));
            }
            position += raw.len() + 1;
        }

        if segments.len() > MAX_PATH_SEGMENTS {
            return Err(PathError::TooManySegments {
                max_segments: MAX_PATH_SEGMENTS,
                actual_segments: segments.len(),
            });
        }

        Ok(Self {
            segments,
        })
    }

    /// Builds a path from pre-validated segments.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptyInput`] when `segments` is empty and
    /// [`PathError::TooManySegments`] when the segment limit is exceeded.
    pub fn from_segments(segments: Vec<PathSegment>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::EmptyInput);
        }
        if segments.len() > MAX_PATH_SEGMENTS {
            return Err(PathError::TooManySegments {
                max_segments: MAX_PATH_SEGMENTS,
                actual_segments: segments.len(),
            });
        }
        Ok(Self {
            segments,
        })
    }

    /// Returns the path segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns false; a parsed path always has at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// crates/gql-check-core/src/runtime/resolver.rs
// ============================================================================
// Module: Response Path Resolver
// Description: Dotted-path resolution over response data trees.
// Purpose: Locate the value(s) a path addresses, with implicit list fan-out.
// Dependencies: crate::core::path, serde_json
// ============================================================================

//! ## Overview
//! Resolution walks a [`FieldPath`] through a response data tree. Object
//! segments index into maps and explicit index segments select one list
//! element. When a field segment meets a list, resolution fans out over
//! every element and the result is the set of values found in any of them.
//! A path that resolves nowhere yields [`Resolution::NotFound`] naming the
//! failing segment; resolution itself never errors and never panics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::core::path::FieldPath;
use crate::core::path::PathSegment;

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Outcome of resolving a path against a data tree.
///
/// # Invariants
/// - `Many` contains at least two values; single hits collapse to `One`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path resolved to exactly one value.
    One(&'a Value),
    /// The path fanned out through lists and resolved to several values.
    Many(Vec<&'a Value>),
    /// The path did not resolve.
    NotFound {
        /// The segment that failed to resolve.
        segment: PathSegment,
    },
}

impl<'a> Resolution<'a> {
    /// Returns every resolved value, empty when not found.
    #[must_use]
    pub fn values(&self) -> Vec<&'a Value> {
        match self {
            Self::One(value) => vec![*value],
            Self::Many(values) => values.clone(),
            Self::NotFound {
                ..
            } => Vec::new(),
        }
    }

    /// Returns true when the path resolved to at least one value.
    #[must_use]
    pub const fn found(&self) -> bool {
        !matches!(
            self,
            Self::NotFound {
                ..
            }
        )
    }
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolves a path against a data tree.
#[must_use]
pub fn resolve<'a>(data: &'a Value, path: &FieldPath) -> Resolution<'a> {
    let mut hits = Vec::new();
    let mut missing: Option<PathSegment> = None;
    collect(data, path.segments(), &mut hits, &mut missing);

    match hits.len() {
        0 => Resolution::NotFound {
            // First unresolved segment wins; empty trees fall back to the
            // path's first segment.
            segment: missing.unwrap_or_else(|| first_segment(path)),
        },
        1 => Resolution::One(hits[0]),
        _ => Resolution::Many(hits),
    }
}

/// Returns the first segment of a path for fallback diagnostics.
fn first_segment(path: &FieldPath) -> PathSegment {
    path.segments()
        .first()
        .cloned()
        .unwrap_or_else(|| PathSegment::Field(String::new()))
}

/// Recursively collects values addressed by the remaining segments.
fn collect<'a>(
    value: &'a Value,
    segments: &[PathSegment],
    hits: &mut Vec<&'a Value>,
    missing: &mut Option<PathSegment>,
) {
    let Some((segment, rest)) = segments.split_first() else {
        hits.push(value);
        return;
    };

    match (value, segment) {
        (Value::Object(map), PathSegment::Field(name)) => {
            if let Some(child) = map.get(name) {
                collect(child, rest, hits, missing);
            } else if missing.is_none() {
                *missing = Some(segment.clone());
            }
        }
        (Value::Array(items), PathSegment::Index(index)) => {
            if let Some(child) = items.get(*index) {
                collect(child, rest, hits, missing);
            } else if missing.is_none() {
                *missing = Some(segment.clone());
            }
        }
        (Value::Array(items), PathSegment::Field(_)) => {
            // Implicit fan-out: try the same segments in every element.
            for item in items {
                collect(item, segments, hits, missing);
            }
            if items.is_empty() && missing.is_none() {
                *missing = Some(segment.clone());
            }
        }
        _ => {
            if missing.is_none() {
                *missing = Some(segment.clone());
            }
        }
    }
}

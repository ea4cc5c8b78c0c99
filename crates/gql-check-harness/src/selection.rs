// crates/gql-check-harness/src/selection.rs
// ============================================================================
// Module: Selection Plans
// Description: Programmatic field selections for scripted operations.
// Purpose: Describe what an operation selects without parsing GraphQL.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`Selection`] is the programmatic stand-in for one field selection in
//! a query document: a field name, its arguments, and nested selections.
//! Arguments are either literals or variable references resolved from the
//! request at execution time. Operations are authored as selection plans
//! precisely so the harness never has to parse query text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Argument Values
// ============================================================================

/// One field argument: a literal or a variable reference.
///
/// # Invariants
/// - `Variable` names carry no `$` sigil.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgValue {
    /// Literal JSON value.
    Literal(Value),
    /// Reference to a request variable by name.
    Variable(String),
}

impl ArgValue {
    /// Resolves the argument against the request variables.
    ///
    /// Unbound variables resolve to `None`, matching absent arguments.
    #[must_use]
    pub fn resolve(&self, variables: &Map<String, Value>) -> Option<Value> {
        match self {
            Self::Literal(value) => Some(value.clone()),
            Self::Variable(name) => variables.get(name).cloned(),
        }
    }
}

// ============================================================================
// SECTION: Selections
// ============================================================================

/// One field selection with arguments and nested selections.
///
/// # Invariants
/// - `field` is non-empty.
/// - Nested selections apply to the resolved value of this field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected field name.
    pub field: String,
    /// Arguments by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub args: BTreeMap<String, ArgValue>,
    /// Nested selections, empty for leaf fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<Selection>,
}

impl Selection {
    /// Creates a leaf selection of the given field.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            field: name.into(),
            args: BTreeMap::new(),
            nested: Vec::new(),
        }
    }

    /// Returns the same selection with a literal argument.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.args.insert(name.into(), ArgValue::Literal(value));
        self
    }

    /// Returns the same selection with a variable-reference argument.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, variable: impl Into<String>) -> Self {
        self.args.insert(name.into(), ArgValue::Variable(variable.into()));
        self
    }

    /// Returns the same selection with one nested selection added.
    #[must_use]
    pub fn with_nested(mut self, nested: Self) -> Self {
        self.nested.push(nested);
        self
    }

    /// Resolves every argument against the request variables.
    #[must_use]
    pub fn resolve_args(&self, variables: &Map<String, Value>) -> BTreeMap<String, Value> {
        self.args
            .iter()
            .filter_map(|(name, arg)| arg.resolve(variables).map(|value| (name.clone(), value)))
            .collect()
    }
}

// crates/gql-check-core/src/interfaces/mod.rs
// ============================================================================
// Module: Collaborator Interfaces
// Description: Backend-agnostic interfaces for execution and registration.
// Purpose: Define the contract surfaces the assertion engine depends on.
// Dependencies: crate::core::response, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The assertion engine consumes responses; it does not produce them. The
//! [`QueryExecutor`] trait is the seam to whatever executes queries, and
//! [`SchemaRegistry`] is the seam to whatever registers ad-hoc types and
//! fields for test fixtures. Implementations must be deterministic per
//! request and reset cleanly between tests.
//!
//! Field resolvers are capability-based: a [`Resolver`] closure receives a
//! [`ResolverContext`] with merged arguments and returns a value or a
//! structured [`ResolverError`] that implementations surface as response
//! errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::core::response::QueryResponse;

// ============================================================================
// SECTION: Query Requests
// ============================================================================

/// One query execution request.
///
/// # Invariants
/// - `query` is the raw document text; this crate never parses it.
/// - `variables` keys are variable names without the `$` sigil.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Raw query document text.
    pub query: String,
    /// Optional operation name for multi-operation documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    /// Request variables.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub variables: Map<String, Value>,
}

impl QueryRequest {
    /// Creates a request from query text with no variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: Map::new(),
        }
    }

    /// Returns the same request with an operation name.
    #[must_use]
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Returns the same request with one variable set.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: Value) -> Self {
        self.variables.insert(name.into(), value);
        self
    }
}

// ============================================================================
// SECTION: Query Executor
// ============================================================================

/// Query executor errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutorError {
    /// No handler was registered for the request.
    #[error("no handler for request: {0}")]
    UnknownRequest(String),
    /// The executor payload did not match the response format.
    #[error("malformed executor payload: {0}")]
    MalformedPayload(String),
    /// Executor reported an error.
    #[error("executor error: {0}")]
    Executor(String),
}

/// Backend-agnostic query executor.
pub trait QueryExecutor {
    /// Executes one query request into a response.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorError`] when the request cannot be served; GraphQL
    /// field errors belong in the response's `errors` list instead.
    fn execute(&self, request: &QueryRequest) -> Result<QueryResponse, ExecutorError>;
}

// ============================================================================
// SECTION: Resolvers
// ============================================================================

/// Resolver errors surfaced as response errors.
///
/// # Invariants
/// - `message` is the user-visible error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ResolverError {
    /// User-visible error message.
    pub message: String,
}

impl ResolverError {
    /// Creates a resolver error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Context handed to a field resolver.
///
/// # Invariants
/// - `args` holds field arguments with request variables already
///   substituted; resolvers never see variable names.
/// - `parent` is the resolved value of the enclosing field, JSON null at
///   the root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolverContext {
    /// Resolved value of the enclosing field.
    parent: Value,
    /// Field arguments by name.
    args: BTreeMap<String, Value>,
}

impl ResolverContext {
    /// Creates a context from a parent value and resolved field arguments.
    #[must_use]
    pub const fn new(parent: Value, args: BTreeMap<String, Value>) -> Self {
        Self {
            parent,
            args,
        }
    }

    /// Creates a root context carrying only arguments.
    #[must_use]
    pub const fn with_args(args: BTreeMap<String, Value>) -> Self {
        Self::new(Value::Null, args)
    }

    /// Returns the resolved value of the enclosing field.
    #[must_use]
    pub const fn parent(&self) -> &Value {
        &self.parent
    }

    /// Returns the raw argument value, if present.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    /// Returns a boolean argument, treating absence and null as false.
    #[must_use]
    pub fn bool_arg(&self, name: &str) -> bool {
        self.arg(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Returns a string argument, if present and a string.
    #[must_use]
    pub fn string_arg(&self, name: &str) -> Option<&str> {
        self.arg(name).and_then(Value::as_str)
    }

    /// Returns an unsigned integer argument, if present and numeric.
    #[must_use]
    pub fn u64_arg(&self, name: &str) -> Option<u64> {
        self.arg(name).and_then(Value::as_u64)
    }
}

/// Capability-based field resolver.
pub type Resolver = Arc<dyn Fn(&ResolverContext) -> Result<Value, ResolverError> + Send + Sync>;

// ============================================================================
// SECTION: Schema Registry
// ============================================================================

/// Schema registration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A type with the same name is already registered.
    #[error("type already registered: {0}")]
    DuplicateType(String),
    /// A field with the same name is already registered on the type.
    #[error("field already registered: {type_name}.{field_name}")]
    DuplicateField {
        /// Owning type name.
        type_name: String,
        /// Duplicate field name.
        field_name: String,
    },
    /// The referenced type is not registered.
    #[error("type not registered: {0}")]
    UnknownType(String),
    /// Registration input failed validation.
    #[error("invalid registration: {0}")]
    Invalid(String),
}

/// Field definition registered on an object type.
///
/// # Invariants
/// - `resolver` is invoked once per selection of the field.
/// - `type_name`, when present, names the registered object type of the
///   resolver's return value so nested selections resolve through it.
#[derive(Clone)]
pub struct FieldDef {
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Registered object type returned by the resolver, if any.
    pub type_name: Option<String>,
    /// Resolver producing the field value.
    pub resolver: Resolver,
}

impl FieldDef {
    /// Creates a field definition from a resolver closure.
    pub fn new<F>(resolver: F) -> Self
    where
        F: Fn(&ResolverContext) -> Result<Value, ResolverError> + Send + Sync + 'static,
    {
        Self {
            description: None,
            type_name: None,
            resolver: Arc::new(resolver),
        }
    }

    /// Returns the same definition with a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the same definition declaring its return object type.
    #[must_use]
    pub fn returning(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("description", &self.description)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Ad-hoc object type registered for test fixtures.
///
/// # Invariants
/// - Field names are unique within the type.
#[derive(Debug, Clone, Default)]
pub struct ObjectTypeDef {
    /// Fields by name.
    pub fields: BTreeMap<String, FieldDef>,
}

impl ObjectTypeDef {
    /// Creates an empty object type definition.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Returns the same definition with one field added.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, field: FieldDef) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

/// Registry of ad-hoc object types and root fields for test fixtures.
pub trait SchemaRegistry {
    /// Registers an object type under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the name is taken or invalid.
    fn register_object_type(
        &mut self,
        name: &str,
        type_def: ObjectTypeDef,
    ) -> Result<(), RegistryError>;

    /// Registers a field on a previously registered type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the type is unknown or the field
    /// name is taken.
    fn register_field(
        &mut self,
        type_name: &str,
        field_name: &str,
        field: FieldDef,
    ) -> Result<(), RegistryError>;

    /// Restores the registry to its pristine state.
    fn reset(&mut self);
}

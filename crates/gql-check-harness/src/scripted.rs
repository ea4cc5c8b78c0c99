// crates/gql-check-harness/src/scripted.rs
// ============================================================================
// Module: Scripted Executor
// Description: Resolver-driven executor for registered operations.
// Purpose: Produce responses, errors included, without a GraphQL engine.
// Dependencies: crate::registry, crate::selection, gql-check-core
// ============================================================================

//! ## Overview
//! The scripted executor walks a registered [`OperationPlan`] instead of
//! parsing query text. Each selection resolves through the resolver
//! registered for its field, or through default property lookup on the
//! parent value when no resolver is registered, matching GraphQL's default
//! field resolution. Resolver errors become response errors carrying the
//! failing field's path while the field itself resolves to null, which
//! mirrors GraphQL field-error propagation closely enough to exercise
//! error-path assertions.
//!
//! Requests route by operation name. A request without one routes to the
//! sole registered operation when exactly one exists; anything else fails
//! closed with an executor error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use gql_check_core::ErrorPathSegment;
use gql_check_core::ExecutorError;
use gql_check_core::FieldDef;
use gql_check_core::QueryExecutor;
use gql_check_core::QueryRequest;
use gql_check_core::QueryResponse;
use gql_check_core::ResolverContext;
use gql_check_core::ResponseError;
use gql_check_core::SchemaRegistry as _;
use serde_json::Map;
use serde_json::Value;

use crate::registry::FieldRegistry;
use crate::registry::ROOT_TYPE_NAME;
use crate::selection::Selection;

// ============================================================================
// SECTION: Operation Plans
// ============================================================================

/// Root selections of one registered operation.
///
/// # Invariants
/// - Every root selection resolves against the registry's root type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// Root field selections, in response order.
    pub selections: Vec<Selection>,
}

impl OperationPlan {
    /// Creates a plan from root selections.
    #[must_use]
    pub const fn new(selections: Vec<Selection>) -> Self {
        Self {
            selections,
        }
    }
}

// ============================================================================
// SECTION: Scripted Executor
// ============================================================================

/// Executor that scripts responses through registered resolvers.
///
/// # Invariants
/// - Execution is deterministic for a given request and registry state.
/// - Resolver errors null the failing field and append a response error;
///   they never abort the surrounding selection set.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    /// Registered fixture types and fields.
    registry: FieldRegistry,
    /// Operation plans by name.
    operations: BTreeMap<String, OperationPlan>,
}

impl ScriptedExecutor {
    /// Creates an executor with an empty registry and no operations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: FieldRegistry::new(),
            operations: BTreeMap::new(),
        }
    }

    /// Returns mutable access to the field registry.
    pub fn registry_mut(&mut self) -> &mut FieldRegistry {
        &mut self.registry
    }

    /// Returns the field registry.
    #[must_use]
    pub const fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Registers an operation plan under the given name.
    pub fn register_operation(&mut self, name: impl Into<String>, plan: OperationPlan) {
        self.operations.insert(name.into(), plan);
    }

    /// Restores the executor to its pristine state.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.operations.clear();
    }

    /// Routes a request to its operation plan.
    fn route(&self, request: &QueryRequest) -> Result<&OperationPlan, ExecutorError> {
        if let Some(name) = &request.operation_name {
            return self
                .operations
                .get(name)
                .ok_or_else(|| ExecutorError::UnknownRequest(name.clone()));
        }
        if self.operations.len() == 1 {
            if let Some(plan) = self.operations.values().next() {
                return Ok(plan);
            }
        }
        Err(ExecutorError::UnknownRequest(
            "request names no operation and the registry has no unique default".to_string(),
        ))
    }

    /// Executes one selection against its parent value.
    ///
    /// A registered resolver wins over the parent's own property; a field
    /// with neither fails execution.
    fn execute_selection(
        &self,
        type_name: Option<&str>,
        parent: &Value,
        selection: &Selection,
        variables: &Map<String, Value>,
        path: &mut Vec<ErrorPathSegment>,
        out: &mut Map<String, Value>,
        errors: &mut Vec<ResponseError>,
    ) -> Result<(), ExecutorError> {
        let field_def = type_name.and_then(|name| self.registry.field(name, &selection.field));

        path.push(ErrorPathSegment::Field(selection.field.clone()));
        let value = match field_def {
            Some(field) => self.resolve_field(field, parent, selection, variables, path, errors)?,
            None => self.default_resolve(parent, selection, variables, path, errors)?,
        };
        path.pop();
        out.insert(selection.field.clone(), value);
        Ok(())
    }

    /// Invokes a field's resolver and applies nested selections.
    fn resolve_field(
        &self,
        field: &FieldDef,
        parent: &Value,
        selection: &Selection,
        variables: &Map<String, Value>,
        path: &mut Vec<ErrorPathSegment>,
        errors: &mut Vec<ResponseError>,
    ) -> Result<Value, ExecutorError> {
        let context = ResolverContext::new(parent.clone(), selection.resolve_args(variables));
        let resolved = match (field.resolver)(&context) {
            Ok(value) => value,
            Err(resolver_error) => {
                errors.push(ResponseError::new(resolver_error.message).with_path(path.clone()));
                return Ok(Value::Null);
            }
        };

        if selection.nested.is_empty() {
            return Ok(resolved);
        }
        self.apply_nested(
            field.type_name.as_deref(),
            &selection.nested,
            resolved,
            variables,
            path,
            errors,
        )
    }

    /// Resolves a field by property lookup on the parent value.
    fn default_resolve(
        &self,
        parent: &Value,
        selection: &Selection,
        variables: &Map<String, Value>,
        path: &mut Vec<ErrorPathSegment>,
        errors: &mut Vec<ResponseError>,
    ) -> Result<Value, ExecutorError> {
        let Some(value) = parent.get(&selection.field) else {
            return Err(ExecutorError::Executor(format!(
                "field not registered and absent from parent: {}",
                selection.field
            )));
        };
        if selection.nested.is_empty() {
            return Ok(value.clone());
        }
        self.apply_nested(None, &selection.nested, value.clone(), variables, path, errors)
    }

    /// Applies nested selections to a resolved value.
    ///
    /// Lists map element-wise with index segments in the error path; null
    /// passes through untouched.
    fn apply_nested(
        &self,
        type_name: Option<&str>,
        nested: &[Selection],
        resolved: Value,
        variables: &Map<String, Value>,
        path: &mut Vec<ErrorPathSegment>,
        errors: &mut Vec<ResponseError>,
    ) -> Result<Value, ExecutorError> {
        match resolved {
            Value::Null => Ok(Value::Null),
            Value::Array(items) => {
                let mut out_items = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    path.push(ErrorPathSegment::Index(index));
                    let value =
                        self.apply_nested(type_name, nested, item, variables, path, errors)?;
                    path.pop();
                    out_items.push(value);
                }
                Ok(Value::Array(out_items))
            }
            parent => {
                let mut object = Map::new();
                for selection in nested {
                    self.execute_selection(
                        type_name, &parent, selection, variables, path, &mut object, errors,
                    )?;
                }
                Ok(Value::Object(object))
            }
        }
    }
}

impl QueryExecutor for ScriptedExecutor {
    fn execute(&self, request: &QueryRequest) -> Result<QueryResponse, ExecutorError> {
        let plan = self.route(request)?;

        let mut data = Map::new();
        let mut errors = Vec::new();
        let mut path = Vec::new();
        for selection in &plan.selections {
            self.execute_selection(
                Some(ROOT_TYPE_NAME),
                &Value::Null,
                selection,
                &request.variables,
                &mut path,
                &mut data,
                &mut errors,
            )?;
        }

        Ok(QueryResponse {
            data: Some(Value::Object(data)),
            errors,
            extensions: None,
        })
    }
}

// crates/gql-check-harness/src/registry.rs
// ============================================================================
// Module: Field Registry
// Description: In-memory schema registry for ad-hoc fixture types.
// Purpose: Register object types and fields with per-test reset.
// Dependencies: gql-check-core
// ============================================================================

//! ## Overview
//! The field registry is the harness implementation of
//! [`SchemaRegistry`]: a map of object types with resolver-backed fields.
//! The root type [`ROOT_TYPE_NAME`] is seeded at construction and restored
//! by [`FieldRegistry::reset`], so fixtures can register root fields
//! without declaring the root type first. Names are validated and size
//! limited; registration input is untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use gql_check_core::FieldDef;
use gql_check_core::ObjectTypeDef;
use gql_check_core::RegistryError;
use gql_check_core::SchemaRegistry;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Name of the root query type seeded into every registry.
pub const ROOT_TYPE_NAME: &str = "RootQuery";

/// Maximum bytes allowed for a type or field name.
const MAX_NAME_BYTES: usize = 128;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// In-memory registry of ad-hoc object types and fields.
///
/// # Invariants
/// - Type names are unique; field names are unique within a type.
/// - [`ROOT_TYPE_NAME`] is always present, including after `reset`.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    /// Object types by name.
    types: BTreeMap<String, ObjectTypeDef>,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRegistry {
    /// Creates a registry seeded with an empty root type.
    #[must_use]
    pub fn new() -> Self {
        let mut types = BTreeMap::new();
        types.insert(ROOT_TYPE_NAME.to_string(), ObjectTypeDef::new());
        Self {
            types,
        }
    }

    /// Returns the registered type, if present.
    #[must_use]
    pub fn object_type(&self, name: &str) -> Option<&ObjectTypeDef> {
        self.types.get(name)
    }

    /// Returns the field definition on a type, if present.
    #[must_use]
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&FieldDef> {
        self.types.get(type_name).and_then(|type_def| type_def.fields.get(field_name))
    }

    /// Returns the number of registered types, the root included.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Validates a type or field name.
    fn validate_name(name: &str) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::Invalid("name is empty".to_string()));
        }
        if name.len() > MAX_NAME_BYTES {
            return Err(RegistryError::Invalid(format!(
                "name exceeds {MAX_NAME_BYTES} bytes: {} bytes",
                name.len()
            )));
        }
        let mut chars = name.chars();
        let leading_ok = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_');
        if !leading_ok || !chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
            return Err(RegistryError::Invalid(format!("name is not an identifier: `{name}`")));
        }
        Ok(())
    }
}

impl SchemaRegistry for FieldRegistry {
    fn register_object_type(
        &mut self,
        name: &str,
        type_def: ObjectTypeDef,
    ) -> Result<(), RegistryError> {
        Self::validate_name(name)?;
        for field_name in type_def.fields.keys() {
            Self::validate_name(field_name)?;
        }
        if self.types.contains_key(name) {
            return Err(RegistryError::DuplicateType(name.to_string()));
        }
        self.types.insert(name.to_string(), type_def);
        Ok(())
    }

    fn register_field(
        &mut self,
        type_name: &str,
        field_name: &str,
        field: FieldDef,
    ) -> Result<(), RegistryError> {
        Self::validate_name(field_name)?;
        let Some(type_def) = self.types.get_mut(type_name) else {
            return Err(RegistryError::UnknownType(type_name.to_string()));
        };
        if type_def.fields.contains_key(field_name) {
            return Err(RegistryError::DuplicateField {
                type_name: type_name.to_string(),
                field_name: field_name.to_string(),
            });
        }
        type_def.fields.insert(field_name.to_string(), field);
        Ok(())
    }

    fn reset(&mut self) {
        self.types.clear();
        self.types.insert(ROOT_TYPE_NAME.to_string(), ObjectTypeDef::new());
    }
}

//! Compiled schemas and the `Schematic` trait
//!
//! A [`Schema`] pairs a JSON Schema document with the compiled `jsonschema`
//! validator for it. Schemas are compiled once and shared behind `Arc`.
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use crate::engine;
use crate::error::{SchemaError, SchemaResult};
use crate::violation::Violation;
use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Options applied when compiling a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Treat `format` as an assertion rather than an annotation
    pub validate_formats: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            validate_formats: true,
        }
    }
}

impl SchemaOptions {
    /// Only report `format` as an annotation
    pub fn without_formats(mut self) -> Self {
        self.validate_formats = false;
        self
    }
}

/// A named, compiled JSON Schema
pub struct Schema {
    name: String,
    raw: Value,
    validator: Validator,
}

impl Schema {
    /// Compile a schema with default options
    pub fn compile<N: Into<String>>(name: N, raw: Value) -> SchemaResult<Self> {
        Self::compile_with(name, raw, &SchemaOptions::default())
    }

    /// Compile a schema with explicit options
    pub fn compile_with<N: Into<String>>(
        name: N,
        raw: Value,
        options: &SchemaOptions,
    ) -> SchemaResult<Self> {
        let name = name.into();
        let validator = jsonschema::options()
            .should_validate_formats(options.validate_formats)
            .build(&raw)
            .map_err(|e| SchemaError::Compile {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            name,
            raw,
            validator,
        })
    }

    /// Compile and wrap in `Arc` for sharing across descriptors
    pub fn shared<N: Into<String>>(name: N, raw: Value) -> SchemaResult<Arc<Self>> {
        Self::compile(name, raw).map(Arc::new)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema document as written
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub(crate) fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Whether the root of the schema accepts an array
    ///
    /// An array candidate validated against such a schema is validated as a
    /// whole rather than element by element.
    pub fn describes_array(&self) -> bool {
        match self.raw.get("type") {
            Some(Value::String(kind)) => kind == "array",
            Some(Value::Array(kinds)) => kinds.iter().any(|k| k == "array"),
            _ => false,
        }
    }

    /// Quick pass/fail check without building violation records
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Validate plain data
    pub fn validate_value(&self, instance: &Value) -> Vec<Violation> {
        engine::collect(self, instance)
    }

    /// Validate any serializable value
    pub fn validate<T: Serialize + ?Sized>(&self, candidate: &T) -> SchemaResult<Vec<Violation>> {
        engine::validation_errors(self, candidate)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("raw", &self.raw)
            .finish_non_exhaustive()
    }
}

/// Types that declare the schema their values are validated against
///
/// This is how a parameter's own type supplies its schema when no explicit
/// schema is given at registration.
///
/// ```rust
/// use paramguard_schemas::{Schema, SchemaResult, Schematic};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// struct BodyDto;
///
/// impl Schematic for BodyDto {
///     fn schema() -> SchemaResult<Arc<Schema>> {
///         Schema::shared("BodyDto", json!({
///             "type": "object",
///             "properties": {"name": {"type": "string", "format": "email"}}
///         }))
///     }
/// }
///
/// let schema = BodyDto::schema().unwrap();
/// assert_eq!(schema.name(), "BodyDto");
/// ```
pub trait Schematic {
    fn schema() -> SchemaResult<Arc<Schema>>;
}

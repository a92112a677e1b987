//! Paramguard Schemas - constraint engine adapter for argument validation
//!
//! This crate wraps the `jsonschema` validator behind a small adapter that
//! reports failures as [`Violation`] records:
//! - **target**: the value that was validated
//! - **property**: the failing field
//! - **constraints**: failed rule identifier (`isEmail`, `isDefined`, ...)
//!   mapped to a human-readable message
//!
//! ## Quick Start
//!
//! ```rust
//! use paramguard_schemas::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::compile("BodyDto", json!({
//!     "type": "object",
//!     "properties": {"name": {"type": "string", "format": "email"}}
//! })).unwrap();
//!
//! assert!(schema.validate_value(&json!({"name": "sds@dasdas.com"})).is_empty());
//! ```
//!
//! Schemas can also be loaded from a directory of JSON or YAML documents
//! through [`SchemaCatalog`].
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

pub mod catalog;
pub mod engine;
pub mod error;
pub mod rules;
pub mod schema;
pub mod violation;

pub use catalog::{Format, SchemaCatalog, SCHEMA_DIR_ENV};
pub use engine::validation_errors;
pub use error::{SchemaError, SchemaResult};
pub use rules::{IS_ARRAY, IS_DEFINED, IS_EMAIL};
pub use schema::{Schema, SchemaOptions, Schematic};
pub use violation::Violation;

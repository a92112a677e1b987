//! Paramguard Core - declarative argument validation for wrapped callables
//!
//! Parameters of a callable are described once, at definition time, with a
//! schema and optionally a path into the argument record. Every call through
//! the resulting wrapper validates its arguments first and either invokes the
//! callable or returns a [`ValidationError`] listing every violation.
//!
//! ## Quick Start
//!
//! ```rust
//! use paramguard_core::{Arguments, ParameterOptions, ParameterRegistry, Schema};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ParameterRegistry::new());
//! let body = Schema::shared("BodyDto", json!({
//!     "type": "object",
//!     "properties": {"name": {"type": "string", "format": "email"}}
//! })).unwrap();
//!
//! let handler = registry
//!     .method("create")
//!     .parameter(0, ParameterOptions::schema(body))
//!     .wrap(|_args: Arguments| 123);
//!
//! let ok = Arguments::new().with_value(json!({"name": "sds@dasdas.com"}));
//! assert_eq!(handler.call(ok).unwrap(), 123);
//!
//! let bad = Arguments::new().with_value(json!({"name": "sds"}));
//! let err = handler.call(bad).unwrap_err();
//! assert_eq!(err.validation_errors()[0].constraint("isEmail"), Some("name must be an email"));
//! ```
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

pub mod arguments;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod path;
pub mod registry;

pub use arguments::Arguments;
pub use config::{GuardConfig, PATH_DELIMITER_ENV};
pub use error::{Error, Result, ValidationError, VALIDATION_ERROR_MESSAGE};
pub use interceptor::{MethodBuilder, Validated, NOT_AN_ARRAY_MESSAGE};
pub use registry::{CallableId, ParameterDescriptor, ParameterOptions, ParameterRegistry};

pub use paramguard_schemas::{
    validation_errors, Schema, SchemaCatalog, SchemaError, SchemaOptions, SchemaResult, Schematic,
    Violation, IS_ARRAY, IS_DEFINED, IS_EMAIL,
};

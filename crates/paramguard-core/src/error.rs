//! Error types for the Paramguard core library
//!
//! [`ValidationError`] is what an intercepted call returns when any described
//! parameter fails validation. [`Error`] covers everything else that can go
//! wrong around it: schema setup, configuration and argument conversion.
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use paramguard_schemas::{SchemaError, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message carried by every [`ValidationError`]
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation Error";

/// Main error type for Paramguard operations
#[derive(Error, Debug)]
pub enum Error {
    /// Schema compilation or lookup errors
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// An argument could not be converted to or from plain data
    #[error("Argument error: {message}")]
    Argument {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Argument {
            message: err.to_string(),
            source: err,
        }
    }
}

/// The error returned in place of the result of a rejected call
///
/// Serializes as `{ "message": "Validation Error", "validationErrors": [...] }`.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    message: String,
    validation_errors: Vec<Violation>,
}

impl ValidationError {
    pub fn new(validation_errors: Vec<Violation>) -> Self {
        Self {
            message: VALIDATION_ERROR_MESSAGE.to_string(),
            validation_errors,
        }
    }

    /// Always `"Validation Error"`
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The violations, in parameter order
    pub fn validation_errors(&self) -> &[Violation] {
        &self.validation_errors
    }

    pub fn into_validation_errors(self) -> Vec<Violation> {
        self.validation_errors
    }

    /// Number of violation records
    pub fn len(&self) -> usize {
        self.validation_errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validation_errors.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<Vec<Violation>> for ValidationError {
    fn from(violations: Vec<Violation>) -> Self {
        Self::new(violations)
    }
}

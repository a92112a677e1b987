//! Error types for schema compilation and loading
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building, loading or applying schemas
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema document is not a valid JSON Schema
    #[error("Failed to compile schema '{name}': {reason}")]
    Compile { name: String, reason: String },

    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },

    /// Lookup of an unknown schema name
    #[error("Schema '{name}' is not registered")]
    NotFound { name: String },

    /// A candidate could not be turned into plain data
    #[error("Failed to serialize candidate: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SchemaError {
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    pub fn json_parse_error(path: PathBuf, source: serde_json::Error) -> Self {
        Self::JsonParse { path, source }
    }

    pub fn yaml_parse_error(path: PathBuf, source: serde_yaml::Error) -> Self {
        Self::YamlParse { path, source }
    }

    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    pub fn not_found<N: Into<String>>(name: N) -> Self {
        Self::NotFound { name: name.into() }
    }
}

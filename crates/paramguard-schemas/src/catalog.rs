//! Named schema catalog backed by JSON and YAML files
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use crate::error::{SchemaError, SchemaResult};
use crate::schema::{Schema, SchemaOptions};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Environment variable naming a directory of schema files
pub const SCHEMA_DIR_ENV: &str = "PARAMGUARD_SCHEMA_DIR";

/// Supported file formats for schema documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> SchemaResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(SchemaError::unsupported_format(path.to_path_buf())),
        }
    }

    /// Parse document content in this format
    pub fn parse(&self, content: &str, path: &Path) -> SchemaResult<Value> {
        match self {
            Format::Yaml => {
                let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
                    .map_err(|e| SchemaError::yaml_parse_error(path.to_path_buf(), e))?;
                serde_json::to_value(yaml_value)
                    .map_err(|e| SchemaError::json_parse_error(path.to_path_buf(), e))
            }
            Format::Json => serde_json::from_str(content)
                .map_err(|e| SchemaError::json_parse_error(path.to_path_buf(), e)),
        }
    }
}

/// A set of compiled schemas addressed by name
///
/// Files are named after their stem with an optional `.schema` suffix
/// removed, so `user.schema.json` and `user.yaml` both register as `user`.
#[derive(Debug, Default)]
pub struct SchemaCatalog {
    options: SchemaOptions,
    schemas: HashMap<String, Arc<Schema>>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SchemaOptions) -> Self {
        Self {
            options,
            schemas: HashMap::new(),
        }
    }

    /// Build a catalog from every schema file in a directory
    pub fn from_dir(dir: &Path) -> SchemaResult<Self> {
        let mut catalog = Self::new();
        catalog.load_dir(dir)?;
        Ok(catalog)
    }

    /// Build a catalog from the directory named by `PARAMGUARD_SCHEMA_DIR`
    ///
    /// Returns `Ok(None)` when the variable is not set.
    pub fn from_env() -> SchemaResult<Option<Self>> {
        match std::env::var_os(SCHEMA_DIR_ENV) {
            Some(dir) => Self::from_dir(Path::new(&dir)).map(Some),
            None => {
                tracing::debug!("{} not set, no schema directory loaded", SCHEMA_DIR_ENV);
                Ok(None)
            }
        }
    }

    /// Load every `.json`, `.yaml` and `.yml` file in `dir`
    ///
    /// Files with other extensions are skipped. Entries are processed in
    /// path order; a later file with the same name replaces an earlier one.
    pub fn load_dir(&mut self, dir: &Path) -> SchemaResult<usize> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| SchemaError::io_error(dir.to_path_buf(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SchemaError::io_error(dir.to_path_buf(), e))?;
            let path = entry.path();
            if path.is_file() && Format::from_path(&path).is_ok() {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.load_file(path)?;
        }

        tracing::info!(
            directory = %dir.display(),
            loaded = paths.len(),
            "loaded schema directory"
        );
        Ok(paths.len())
    }

    /// Load and compile a single schema file
    pub fn load_file(&mut self, path: &Path) -> SchemaResult<Arc<Schema>> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::io_error(path.to_path_buf(), e))?;
        let raw = format.parse(&content, path)?;
        let name = schema_name(path);

        tracing::debug!(schema = %name, path = %path.display(), "compiling schema");
        self.insert(name, raw)
    }

    /// Compile and register a schema document under `name`
    pub fn insert<N: Into<String>>(&mut self, name: N, raw: Value) -> SchemaResult<Arc<Schema>> {
        let name = name.into();
        let schema = Arc::new(Schema::compile_with(name.clone(), raw, &self.options)?);
        self.schemas.insert(name, Arc::clone(&schema));
        Ok(schema)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Schema>> {
        self.schemas.get(name).cloned()
    }

    /// Like [`get`](Self::get) but unknown names are an error
    pub fn require(&self, name: &str) -> SchemaResult<Arc<Schema>> {
        self.get(name).ok_or_else(|| SchemaError::not_found(name))
    }

    /// Registered names, sorted alphabetically
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

fn schema_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    stem.strip_suffix(".schema").unwrap_or(stem).to_string()
}

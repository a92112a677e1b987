//! Runtime configuration for argument validation
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::path::DEFAULT_DELIMITER;
use std::env::VarError;

/// Environment variable overriding the path delimiter
pub const PATH_DELIMITER_ENV: &str = "PARAMGUARD_PATH_DELIMITER";

/// Configuration shared by every callable of a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    /// Separator between segments of a path override
    pub path_delimiter: char,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            path_delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl GuardConfig {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var(PATH_DELIMITER_ENV) {
            Ok(value) => Self::default().with_delimiter_str(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(Error::Configuration {
                message: format!("{} is not valid unicode", PATH_DELIMITER_ENV),
                source: Some(e.into()),
            }),
        }
    }

    /// Set the path delimiter
    pub fn with_path_delimiter(mut self, delimiter: char) -> Self {
        self.path_delimiter = delimiter;
        self
    }

    fn with_delimiter_str(self, value: &str) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(delimiter), None) => Ok(self.with_path_delimiter(delimiter)),
            _ => Err(Error::Configuration {
                message: format!(
                    "{} must be exactly one character, got {:?}",
                    PATH_DELIMITER_ENV, value
                ),
                source: None,
            }),
        }
    }
}

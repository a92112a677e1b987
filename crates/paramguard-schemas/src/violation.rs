//! Violation records produced by the constraint engine
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A failed validation of one field of one target
///
/// `constraints` maps a rule identifier such as `isEmail` or `isDefined`
/// to its human-readable message. Callers branch on these keys, so they
/// are never rewritten after the engine produces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The value that was validated
    pub target: Value,
    /// Name of the failing field, dot-joined when nested
    pub property: String,
    /// Failed rule identifier to message
    pub constraints: BTreeMap<String, String>,
}

impl Violation {
    /// Create a violation with no failed rules yet
    pub fn new<P: Into<String>>(target: Value, property: P) -> Self {
        Self {
            target,
            property: property.into(),
            constraints: BTreeMap::new(),
        }
    }

    /// Add a failed rule
    pub fn with_constraint<R, M>(mut self, rule: R, message: M) -> Self
    where
        R: Into<String>,
        M: Into<String>,
    {
        self.constraints.insert(rule.into(), message.into());
        self
    }

    /// Message for a rule, if that rule failed
    pub fn constraint(&self, rule: &str) -> Option<&str> {
        self.constraints.get(rule).map(String::as_str)
    }

    /// Whether the given rule failed
    pub fn has_constraint(&self, rule: &str) -> bool {
        self.constraints.contains_key(rule)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let property = if self.property.is_empty() {
            "(root)"
        } else {
            &self.property
        };
        write!(f, "{}:", property)?;
        for (i, message) in self.constraints.values().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, " {}", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constraint_lookup() {
        let violation = Violation::new(json!({"name": "sds"}), "name")
            .with_constraint("isEmail", "name must be an email");

        assert_eq!(violation.constraint("isEmail"), Some("name must be an email"));
        assert!(violation.has_constraint("isEmail"));
        assert!(!violation.has_constraint("isDefined"));
    }

    #[test]
    fn test_display() {
        let violation = Violation::new(json!({}), "name")
            .with_constraint("isDefined", "name should not be null or undefined")
            .with_constraint("isEmail", "name must be an email");
        assert_eq!(
            violation.to_string(),
            "name: name should not be null or undefined; name must be an email"
        );

        let root = Violation::new(json!(1), "").with_constraint("unknownValue", "bad");
        assert_eq!(root.to_string(), "(root): bad");
    }

    #[test]
    fn test_serialized_shape() {
        let violation = Violation::new(json!({"name": "sds"}), "name")
            .with_constraint("isEmail", "name must be an email");
        let value = serde_json::to_value(&violation).unwrap();
        assert_eq!(
            value,
            json!({
                "target": {"name": "sds"},
                "property": "name",
                "constraints": {"isEmail": "name must be an email"}
            })
        );
    }
}

//! Constraint engine adapter
//!
//! Runs a candidate through the compiled `jsonschema` validator and turns
//! every reported error into [`Violation`] records. Failures on the same
//! field of one target are merged into a single record, so each record
//! names exactly one field. Output order follows the engine's error order,
//! which is stable for a given schema and candidate.
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use crate::error::SchemaResult;
use crate::rules::{self, Failure};
use crate::schema::Schema;
use crate::violation::Violation;
use serde::Serialize;
use serde_json::Value;

/// Validate any serializable candidate against a schema
///
/// # Examples
///
/// ```rust
/// use paramguard_schemas::{validation_errors, Schema};
/// use serde_json::json;
///
/// let schema = Schema::compile("BodyDto", json!({
///     "type": "object",
///     "properties": {"name": {"type": "string", "format": "email"}}
/// })).unwrap();
///
/// let violations = validation_errors(&schema, &json!({"name": "sds"})).unwrap();
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].property, "name");
/// assert_eq!(violations[0].constraint("isEmail"), Some("name must be an email"));
/// ```
pub fn validation_errors<T: Serialize + ?Sized>(
    schema: &Schema,
    candidate: &T,
) -> SchemaResult<Vec<Violation>> {
    let instance = serde_json::to_value(candidate)?;
    Ok(collect(schema, &instance))
}

pub(crate) fn collect(schema: &Schema, instance: &Value) -> Vec<Violation> {
    let mut violations: Vec<Violation> = Vec::new();

    for error in schema.validator().iter_errors(instance) {
        for failure in rules::classify(&error) {
            merge(&mut violations, instance, failure);
        }
    }

    if !violations.is_empty() {
        tracing::trace!(
            schema = schema.name(),
            violations = violations.len(),
            "candidate failed schema constraints"
        );
    }

    violations
}

fn merge(violations: &mut Vec<Violation>, target: &Value, failure: Failure) {
    match violations.iter_mut().find(|v| v.property == failure.property) {
        Some(existing) => {
            existing
                .constraints
                .entry(failure.rule)
                .or_insert(failure.message);
        }
        None => violations.push(
            Violation::new(target.clone(), failure.property)
                .with_constraint(failure.rule, failure.message),
        ),
    }
}

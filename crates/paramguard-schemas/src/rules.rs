//! Mapping of JSON Schema failures to rule identifiers and messages
//!
//! Each engine error is classified by the keyword that failed. The rule
//! identifiers and message wording follow the class-validator vocabulary
//! so callers can branch on keys like `isEmail` or `isDefined`.
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use jsonschema::error::{TypeKind, ValidationErrorKind};
use jsonschema::{JsonType, ValidationError};
use serde_json::Value;

pub const IS_DEFINED: &str = "isDefined";
pub const IS_ARRAY: &str = "isArray";
pub const IS_EMAIL: &str = "isEmail";
pub const UNKNOWN_VALUE: &str = "unknownValue";
pub const WHITELIST: &str = "whitelistValidation";

/// One failed rule on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Failure {
    pub property: String,
    pub rule: String,
    pub message: String,
}

impl Failure {
    fn new<R: Into<String>, M: Into<String>>(property: String, rule: R, message: M) -> Self {
        Self {
            property,
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// Classify one engine error
///
/// Limits and settings come from the error itself, so schemas that reach a
/// keyword through `$ref` classify the same as inline ones.
pub(crate) fn classify(error: &ValidationError<'_>) -> Vec<Failure> {
    let segments = pointer_segments(&error.instance_path.to_string());
    let field = field_name(&segments);

    let (rule, message) = match &error.kind {
        ValidationErrorKind::Required { property } => {
            let name = plain(property);
            return vec![Failure::new(
                join(&segments, &name),
                IS_DEFINED,
                format!("{} should not be null or undefined", name),
            )];
        }
        ValidationErrorKind::AdditionalProperties { unexpected } => {
            return unexpected
                .iter()
                .map(|name| {
                    Failure::new(
                        join(&segments, name),
                        WHITELIST,
                        format!("property {} should not exist", name),
                    )
                })
                .collect();
        }
        ValidationErrorKind::Format { format } => format_rule(format, field),
        ValidationErrorKind::Type { .. } if segments.is_empty() => (
            UNKNOWN_VALUE.to_string(),
            "an unknown value was passed to the validate function".to_string(),
        ),
        ValidationErrorKind::Type { kind } => {
            let (rule, message) = type_rule(expected_type(kind), field);
            (rule.to_string(), message)
        }
        kind => match keyword_rule(kind, field) {
            Some(rule) => rule,
            None => (failed_keyword(error), error.to_string()),
        },
    };

    vec![Failure::new(segments.join("."), rule, message)]
}

fn format_rule(format: &str, field: &str) -> (String, String) {
    let (rule, message) = match format {
        "email" | "idn-email" => (IS_EMAIL, format!("{} must be an email", field)),
        "uri" | "url" | "iri" => ("isUrl", format!("{} must be a URL address", field)),
        "uuid" => ("isUuid", format!("{} must be a UUID", field)),
        "date-time" | "date" => (
            "isDateString",
            format!("{} must be a valid ISO 8601 date string", field),
        ),
        "ipv4" | "ipv6" => ("isIp", format!("{} must be an ip address", field)),
        other => ("isFormat", format!("{} must match {} format", field, other)),
    };
    (rule.to_string(), message)
}

fn keyword_rule(kind: &ValidationErrorKind, field: &str) -> Option<(String, String)> {
    let (rule, message) = match kind {
        ValidationErrorKind::MinLength { limit } => (
            "minLength",
            format!("{} must be longer than or equal to {} characters", field, limit),
        ),
        ValidationErrorKind::MaxLength { limit } => (
            "maxLength",
            format!("{} must be shorter than or equal to {} characters", field, limit),
        ),
        ValidationErrorKind::Minimum { limit } => {
            ("min", format!("{} must not be less than {}", field, plain(limit)))
        }
        ValidationErrorKind::Maximum { limit } => {
            ("max", format!("{} must not be greater than {}", field, plain(limit)))
        }
        ValidationErrorKind::Pattern { pattern } => (
            "matches",
            format!("{} must match {} regular expression", field, pattern),
        ),
        ValidationErrorKind::Enum { options } => {
            let options: Vec<String> = match options {
                Value::Array(items) => items.iter().map(plain).collect(),
                other => vec![plain(other)],
            };
            (
                "isEnum",
                format!("{} must be one of the following values: {}", field, options.join(", ")),
            )
        }
        ValidationErrorKind::Constant { expected_value } => (
            "equals",
            format!("{} must be equal to {}", field, plain(expected_value)),
        ),
        ValidationErrorKind::MinItems { limit } => (
            "arrayMinSize",
            format!("{} must contain at least {} elements", field, limit),
        ),
        ValidationErrorKind::MaxItems { limit } => (
            "arrayMaxSize",
            format!("{} must contain no more than {} elements", field, limit),
        ),
        ValidationErrorKind::UniqueItems => {
            ("arrayUnique", format!("All {}'s elements must be unique", field))
        }
        _ => return None,
    };
    Some((rule.to_string(), message))
}

/// Last segment of the schema path, i.e. the keyword that failed
fn failed_keyword(error: &ValidationError<'_>) -> String {
    pointer_segments(&error.schema_path.to_string())
        .pop()
        .unwrap_or_default()
}

/// First non-null type named by a `type` keyword
fn expected_type(kind: &TypeKind) -> JsonType {
    match kind {
        TypeKind::Single(single) => *single,
        TypeKind::Multiple(types) => {
            let mut candidates = types.iter();
            let first = candidates.next().unwrap_or(JsonType::Null);
            if first == JsonType::Null {
                candidates.next().unwrap_or(first)
            } else {
                first
            }
        }
    }
}

fn type_rule(kind: JsonType, field: &str) -> (&'static str, String) {
    match kind {
        JsonType::String => ("isString", format!("{} must be a string", field)),
        JsonType::Integer => ("isInt", format!("{} must be an integer number", field)),
        JsonType::Number => (
            "isNumber",
            format!("{} must be a number conforming to the specified constraints", field),
        ),
        JsonType::Boolean => ("isBoolean", format!("{} must be a boolean value", field)),
        JsonType::Array => (IS_ARRAY, format!("{} must be an array", field)),
        JsonType::Object => ("isObject", format!("{} must be an object", field)),
        JsonType::Null => ("isNull", format!("{} must be null", field)),
    }
}

/// Decode a JSON pointer into its unescaped segments
fn pointer_segments(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect()
}

fn join(segments: &[String], name: &str) -> String {
    if segments.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", segments.join("."), name)
    }
}

fn field_name(segments: &[String]) -> &str {
    segments.last().map(String::as_str).unwrap_or("value")
}

/// Render a value without JSON quoting for strings
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

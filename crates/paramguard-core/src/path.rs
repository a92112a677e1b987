//! Dot-delimited path resolution over plain data
//!
//! Resolution never fails: a missing key, an out-of-range index, or a
//! `null`/scalar intermediate all resolve to `None`.
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Default separator between path segments
pub const DEFAULT_DELIMITER: char = '.';

/// Resolve a dot-delimited path such as `"body.item.name"`
///
/// ```rust
/// use paramguard_core::path::resolve;
/// use serde_json::json;
///
/// let data = json!({"body": {"item": {"name": "Danny"}}});
/// assert_eq!(resolve(&data, "body.item.name"), Some(&json!("Danny")));
/// assert_eq!(resolve(&json!({}), "body.item.name"), None);
/// ```
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    resolve_with(root, path, DEFAULT_DELIMITER)
}

/// Resolve a path split on an explicit delimiter
///
/// Object segments look up keys; a segment that parses as an unsigned
/// integer indexes into an array.
pub fn resolve_with<'a>(root: &'a Value, path: &str, delimiter: char) -> Option<&'a Value> {
    path.split(delimiter).try_fold(root, step)
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

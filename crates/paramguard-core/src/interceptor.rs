//! Call interception
//!
//! A [`Validated`] wrapper runs every registered parameter descriptor of its
//! callable against the incoming [`Arguments`] before the wrapped function
//! runs. Violations from all descriptors are collected first; the function
//! is only invoked when none were found.
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use crate::arguments::Arguments;
use crate::error::{Result, ValidationError};
use crate::path;
use crate::registry::{CallableId, ParameterDescriptor, ParameterOptions, ParameterRegistry};
use paramguard_schemas::{Violation, IS_ARRAY, IS_DEFINED};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, debug_span, warn};

/// Message used when an array parameter receives something else
pub const NOT_AN_ARRAY_MESSAGE: &str = "input param must be array";

/// Describes the parameters of one callable, then wraps it
///
/// ```rust
/// use paramguard_core::{Arguments, ParameterOptions, ParameterRegistry, Schema};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let registry = Arc::new(ParameterRegistry::new());
/// let schema = Schema::shared("Page", json!({"type": "integer", "minimum": 1})).unwrap();
///
/// let fetch = registry
///     .method("fetch")
///     .parameter(0, ParameterOptions::schema(schema).named("page"))
///     .wrap(|args: Arguments| args.decode::<u32>(0).unwrap_or_default() * 10);
///
/// assert_eq!(fetch.call(Arguments::new().with_value(json!(3))).unwrap(), 30);
/// assert!(fetch.call(Arguments::new().with_value(json!(0))).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    registry: Arc<ParameterRegistry>,
    id: CallableId,
    name: String,
}

impl MethodBuilder {
    pub(crate) fn new(registry: Arc<ParameterRegistry>, id: CallableId, name: String) -> Self {
        Self { registry, id, name }
    }

    /// Register how the parameter at `index` is located and validated
    pub fn parameter(self, index: usize, options: ParameterOptions) -> Self {
        self.registry.register(self.id, index, options);
        self
    }

    /// Same as [`parameter`](Self::parameter), for options that may fail to build
    pub fn describe_parameter(self, index: usize, options: Result<ParameterOptions>) -> Result<Self> {
        Ok(self.parameter(index, options?))
    }

    pub fn id(&self) -> CallableId {
        self.id
    }

    /// Wrap the callable; every call through the wrapper is validated first
    pub fn wrap<F>(self, function: F) -> Validated<F> {
        Validated {
            registry: self.registry,
            id: self.id,
            name: self.name,
            function,
        }
    }
}

/// A callable guarded by its registered parameter descriptors
pub struct Validated<F> {
    registry: Arc<ParameterRegistry>,
    id: CallableId,
    name: String,
    function: F,
}

impl<F> Validated<F> {
    pub fn id(&self) -> CallableId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run validation only, without invoking the callable
    pub fn check(&self, args: &Arguments) -> Vec<Violation> {
        let descriptors = self.registry.lookup(self.id);
        if descriptors.is_empty() {
            return Vec::new();
        }

        let context = args.context();
        let delimiter = self.registry.config().path_delimiter;

        descriptors
            .iter()
            .flat_map(|descriptor| check_parameter(descriptor, args, &context, delimiter))
            .collect()
    }

    /// Validate `args`, then invoke the callable with them
    ///
    /// Returns the callable's result unchanged, or a [`ValidationError`]
    /// carrying every violation found when any parameter is invalid.
    pub fn call<R>(&self, args: Arguments) -> std::result::Result<R, ValidationError>
    where
        F: Fn(Arguments) -> R,
    {
        let span = debug_span!("validated_call", callable = %self.name, id = %self.id);
        let _enter = span.enter();

        let violations = self.check(&args);
        if !violations.is_empty() {
            warn!(
                violations = violations.len(),
                "Rejected call to '{}'", self.name
            );
            return Err(ValidationError::new(violations));
        }

        debug!("Arguments passed validation");
        Ok((self.function)(args))
    }

    /// Unwrap the original callable
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F> fmt::Debug for Validated<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validated")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn check_parameter(
    descriptor: &ParameterDescriptor,
    args: &Arguments,
    context: &Value,
    delimiter: char,
) -> Vec<Violation> {
    let candidate = match &descriptor.path {
        Some(p) => path::resolve_with(context, p, delimiter),
        None => args.get(descriptor.index),
    };

    let array_mode = descriptor.array_mode
        || (candidate.is_some_and(Value::is_array) && !descriptor.schema.describes_array());

    if array_mode {
        return match candidate {
            Some(Value::Array(items)) => items
                .iter()
                .flat_map(|item| validate(descriptor, item))
                .collect(),
            other => vec![Violation::new(other.cloned().unwrap_or(Value::Null), descriptor.label())
                .with_constraint(IS_ARRAY, NOT_AN_ARRAY_MESSAGE)],
        };
    }

    match candidate {
        Some(value) => validate(descriptor, value),
        None => {
            let label = descriptor.label();
            let message = format!("property {} is missing", label);
            vec![Violation::new(context.clone(), label).with_constraint(IS_DEFINED, message)]
        }
    }
}

/// Validate one candidate, naming whole-value failures after the parameter
fn validate(descriptor: &ParameterDescriptor, candidate: &Value) -> Vec<Violation> {
    let mut violations = descriptor.schema.validate_value(candidate);
    for violation in violations.iter_mut().filter(|v| v.property.is_empty()) {
        violation.property = descriptor.label();
    }
    violations
}

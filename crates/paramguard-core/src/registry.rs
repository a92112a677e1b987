//! Parameter target registry
//!
//! Records, per callable, how each described parameter is located and
//! which schema it is validated against. Descriptors are written once at
//! registration and read on every call.
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use crate::config::GuardConfig;
use crate::error::Result;
use crate::interceptor::MethodBuilder;
use paramguard_schemas::{Schema, Schematic};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Opaque identity of a registered callable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallableId(u64);

impl fmt::Display for CallableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "callable#{}", self.0)
    }
}

/// How to locate and validate one parameter
#[derive(Debug, Clone)]
pub struct ParameterOptions {
    schema: Arc<Schema>,
    path: Option<String>,
    array_mode: bool,
    name: Option<String>,
}

impl ParameterOptions {
    /// Validate the argument at the parameter's index against `schema`
    ///
    /// An array argument is validated element by element unless the schema
    /// itself describes an array.
    pub fn schema(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            path: None,
            array_mode: false,
            name: None,
        }
    }

    /// Validate against the schema the parameter type declares
    pub fn of<T: Schematic>() -> Result<Self> {
        Ok(Self::schema(T::schema()?))
    }

    /// Locate the value by path in the merged argument record instead of by index
    pub fn path<P: Into<String>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Require an array and validate each element
    pub fn each(mut self) -> Self {
        self.array_mode = true;
        self
    }

    /// Label used for this parameter in synthesized violations
    pub fn named<N: Into<String>>(mut self, name: N) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A registered parameter target
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    /// Zero-based position in the parameter list
    pub index: usize,
    pub name: Option<String>,
    pub schema: Arc<Schema>,
    /// Path into the merged argument record, when set
    pub path: Option<String>,
    /// Validate each element of an array candidate
    pub array_mode: bool,
}

impl ParameterDescriptor {
    fn new(index: usize, options: ParameterOptions) -> Self {
        Self {
            index,
            name: options.name,
            schema: options.schema,
            path: options.path,
            array_mode: options.array_mode,
        }
    }

    /// The path override, else the parameter name, else the index
    pub fn label(&self) -> String {
        self.path
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| self.index.to_string())
    }
}

#[derive(Debug, Default)]
struct CallEntry {
    name: String,
    parameters: BTreeMap<usize, ParameterDescriptor>,
}

/// Registry of parameter descriptors keyed by callable
///
/// Registration takes the write lock; lookups take the read lock and
/// return a copy, so calls never validate while holding the lock.
#[derive(Debug, Default)]
pub struct ParameterRegistry {
    config: GuardConfig,
    next_id: AtomicU64,
    entries: RwLock<HashMap<CallableId, CallEntry>>,
}

impl ParameterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GuardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Start describing a callable
    pub fn method<N: Into<String>>(self: &Arc<Self>, name: N) -> MethodBuilder {
        let name = name.into();
        let id = self.allocate(name.clone());
        MethodBuilder::new(Arc::clone(self), id, name)
    }

    /// Assign a fresh identity to a callable
    pub fn allocate<N: Into<String>>(&self, name: N) -> CallableId {
        let id = CallableId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            id,
            CallEntry {
                name: name.into(),
                parameters: BTreeMap::new(),
            },
        );
        id
    }

    /// Record a descriptor for one parameter; the last registration wins
    pub fn register(&self, callable: CallableId, index: usize, options: ParameterOptions) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(callable).or_default();
        let descriptor = ParameterDescriptor::new(index, options);

        if entry.parameters.insert(index, descriptor).is_some() {
            log::warn!(
                "Parameter {} of '{}' ({}) was already described; replacing",
                index,
                entry.name,
                callable
            );
        }
    }

    /// All descriptors of a callable, ordered by parameter index
    pub fn lookup(&self, callable: CallableId) -> Vec<ParameterDescriptor> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&callable)
            .map(|entry| entry.parameters.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Name given to a callable at allocation
    pub fn name(&self, callable: CallableId) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&callable).map(|entry| entry.name.clone())
    }

    /// Number of known callables
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

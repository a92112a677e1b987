//! Argument lists passed to wrapped callables
//!
//! Copyright (c) 2025 Paramguard Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// The ordered arguments of one call, held as plain data
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Arguments {
    values: Vec<Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any serializable value
    pub fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.values.push(serde_json::to_value(value)?);
        Ok(())
    }

    /// Builder form of [`push`](Self::push)
    pub fn with<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        self.push(value)?;
        Ok(self)
    }

    /// Builder form for values that are already plain data
    pub fn with_value(mut self, value: Value) -> Self {
        self.values.push(value);
        self
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Deserialize the argument at `index` into a typed value
    ///
    /// A missing argument decodes as `null`, so `Option<T>` parameters work.
    pub fn decode<T: DeserializeOwned>(&self, index: usize) -> Result<T> {
        let value = self.values.get(index).cloned().unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// The whole argument list viewed as one record
    ///
    /// Object arguments are merged shallowly in order, later keys replacing
    /// earlier ones. Non-object arguments contribute nothing.
    pub fn context(&self) -> Value {
        let mut merged = Map::new();
        for value in &self.values {
            if let Value::Object(map) = value {
                for (key, field) in map {
                    merged.insert(key.clone(), field.clone());
                }
            }
        }
        Value::Object(merged)
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<Value> for Arguments {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

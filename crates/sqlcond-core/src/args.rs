//! Named arguments available at render time

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Named arguments supplied by the caller for one render call
///
/// Keys are argument names without their prefix (`clientID` for a condition
/// written with `@clientID`). Only key presence is consulted when rendering;
/// the values are carried for the caller's own query binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterArgs {
    values: HashMap<String, Value>,
}

impl FilterArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl From<HashMap<String, Value>> for FilterArgs {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FilterArgs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

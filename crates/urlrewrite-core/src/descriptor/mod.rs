//! Request descriptors: the routing target and parameters a slug resolves to.
//!
//! The resolver treats a descriptor as opaque and passes it through unchanged.
//! Key order is preserved from insertion (or from the JSON it was parsed from).

mod codec;

pub use codec::{decode_rule, encode_rule};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered mapping of string keys to JSON values. Empty means "no rule".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestDescriptor(Map<String, Value>);

impl RequestDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Inserts or replaces `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for RequestDescriptor {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for RequestDescriptor {
    type Error = Value;

    /// Accepts a JSON object; any other value is handed back unchanged.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

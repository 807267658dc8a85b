//! In-memory form of a rule document for one read-modify-write pass.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level rule document: normalized slug → encoded rule, in document order.
///
/// Values stay raw so rules an operation does not touch are written back
/// exactly as they were read, malformed ones included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct RuleTable(IndexMap<String, Value>);

impl RuleTable {
    pub(crate) fn parse(text: &str) -> Result<Self, serde_json::Error> {
        // A truncated-to-zero file is what a reader sees mid-rewrite.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text)
    }

    pub(crate) fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub(crate) fn get(&self, slug: &str) -> Option<&Value> {
        self.0.get(slug)
    }

    pub(crate) fn insert(&mut self, slug: String, encoded: Value) {
        self.0.insert(slug, encoded);
    }

    pub(crate) fn remove(&mut self, slug: &str) -> Option<Value> {
        self.0.shift_remove(slug)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

// ABOUTME: Defines ToolOutput - the key-value object a tool returns.
// ABOUTME: Shape is tool-specific; no schema is shared across tools.

use serde::Serialize;
use serde_json::{Map, Value};

/// Result of a tool execution, an ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ToolOutput {
    fields: Map<String, Value>,
}

impl ToolOutput {
    /// Create an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the output. Values that fail to serialize are skipped.
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.fields.insert(key.into(), v);
        }
        self
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume the output and return the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for ToolOutput {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<ToolOutput> for Value {
    fn from(output: ToolOutput) -> Self {
        Value::Object(output.fields)
    }
}

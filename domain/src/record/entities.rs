//! Structured record entity

use serde::Serialize;
use serde_json::{Map, Value};

/// One validated question in the field layout of its schema (Entity)
///
/// Immutable once produced by the validator — the exporter and the display
/// layer consume it as-is and perform no further validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredRecord {
    values: Map<String, Value>,
}

impl StructuredRecord {
    /// Construct from already-validated values. Only the validator (and
    /// tests) should build records directly.
    pub fn from_values(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Get a field value by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// All field values
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Consume into the underlying map
    pub fn into_values(self) -> Map<String, Value> {
        self.values
    }

    /// Render as pretty JSON for display
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.values).unwrap_or_else(|_| "{}".to_string())
    }
}

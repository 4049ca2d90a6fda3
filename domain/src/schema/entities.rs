//! Question-type schema entities
//!
//! A [`QuestionSchema`] is the structural contract for one question type:
//! an ordered list of field definitions plus the prompt template used to
//! instruct the AI backend. Field order is significant — it drives prompt
//! field descriptions and spreadsheet column order.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder in a prompt template replaced with the raw question text
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Value type a schema field may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// A plain string
    Text,
    /// true / false
    Boolean,
    /// Integer or float
    Number,
    /// Ordered list of strings
    TextList,
    /// String-to-string map (e.g. option letter to option text)
    TextMap,
}

impl FieldType {
    /// Name used in diagnostics and the prompt field contract
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Boolean => "boolean",
            FieldType::Number => "number",
            FieldType::TextList => "text_list",
            FieldType::TextMap => "text_map",
        }
    }

    /// Check whether a JSON value conforms to this type
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::Text => value.is_string(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Number => value.is_number(),
            FieldType::TextList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            FieldType::TextMap => value
                .as_object()
                .is_some_and(|map| map.values().all(Value::is_string)),
        }
    }

    /// How the type is described to the model inside the prompt
    pub fn prompt_hint(&self) -> &'static str {
        match self {
            FieldType::Text => "a string",
            FieldType::Boolean => "a boolean (true or false)",
            FieldType::Number => "a number",
            FieldType::TextList => "an array of strings",
            FieldType::TextMap => "an object mapping keys to strings",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One field of a question-type schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name as it appears in model output and spreadsheet headers
    pub name: String,
    /// Value type the field must hold
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the field must be present in every record
    #[serde(default)]
    pub required: bool,
    /// Optional description, included in the prompt field contract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A user-defined question-type schema (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSchema {
    /// Stable identifier (e.g. "single_choice")
    pub id: String,
    /// Display name
    pub name: String,
    /// What kind of question this schema describes
    #[serde(default)]
    pub description: String,
    /// Ordered field definitions
    pub fields: Vec<FieldDefinition>,
    /// Prompt template; must contain the `{text}` placeholder
    pub prompt_template: String,
}

impl QuestionSchema {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            fields: Vec::new(),
            prompt_template: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_prompt_template(mut self, template: impl Into<String>) -> Self {
        self.prompt_template = template.into();
        self
    }

    /// Look up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in schema order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Names of all required fields, in schema order
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Validate the definition itself.
    ///
    /// Checks the invariants a malformed user-supplied schema can break:
    /// empty id/name, no fields, duplicate field names, empty field names,
    /// and a prompt template without the `{text}` placeholder.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidSchema("schema id is empty".into()));
        }
        if self.id.contains(char::is_whitespace) {
            return Err(DomainError::InvalidSchema(format!(
                "schema id '{}' contains whitespace",
                self.id
            )));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidSchema("schema name is empty".into()));
        }
        if self.fields.is_empty() {
            return Err(DomainError::InvalidSchema(
                "schema defines no fields".into(),
            ));
        }
        for (i, field) in self.fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(DomainError::InvalidSchema(format!(
                    "field #{} has an empty name",
                    i + 1
                )));
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(DomainError::InvalidSchema(format!(
                    "duplicate field name '{}'",
                    field.name
                )));
            }
        }
        if self.prompt_template.trim().is_empty() {
            return Err(DomainError::InvalidSchema(
                "prompt template is empty".into(),
            ));
        }
        if !self.prompt_template.contains(TEXT_PLACEHOLDER) {
            return Err(DomainError::InvalidSchema(format!(
                "prompt template is missing the {} placeholder",
                TEXT_PLACEHOLDER
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> QuestionSchema {
        QuestionSchema::new("single_choice", "Single choice")
            .with_field(FieldDefinition::new("question", FieldType::Text).required())
            .with_field(FieldDefinition::new("options", FieldType::TextMap).required())
            .with_field(FieldDefinition::new("answer", FieldType::Text).required())
            .with_field(FieldDefinition::new("analysis", FieldType::Text))
            .with_prompt_template("Convert this question: {text}")
    }

    #[test]
    fn test_valid_schema_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_duplicate_field_names_rejected() {
        let schema = sample().with_field(FieldDefinition::new("answer", FieldType::Text));
        let err = schema.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate field name 'answer'"));
    }

    #[test]
    fn test_template_requires_placeholder() {
        let mut schema = sample();
        schema.prompt_template = "no placeholder here".into();
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_empty_fields_rejected() {
        let schema = QuestionSchema::new("x", "X").with_prompt_template("{text}");
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_field_type_matching() {
        assert!(FieldType::Text.matches(&json!("hello")));
        assert!(FieldType::Boolean.matches(&json!(true)));
        assert!(FieldType::Number.matches(&json!(3.5)));
        assert!(FieldType::TextList.matches(&json!(["a", "b"])));
        assert!(!FieldType::TextList.matches(&json!(["a", 1])));
        assert!(FieldType::TextMap.matches(&json!({"A": "x"})));
        assert!(!FieldType::TextMap.matches(&json!({"A": 1})));
        assert!(!FieldType::Text.matches(&json!(42)));
    }

    #[test]
    fn test_required_fields_in_order() {
        assert_eq!(
            sample().required_fields(),
            vec!["question", "options", "answer"]
        );
    }

    #[test]
    fn test_unsupported_type_fails_deserialization() {
        let raw = json!({
            "name": "answer",
            "type": "uuid"
        });
        let parsed: Result<FieldDefinition, _> = serde_json::from_value(raw);
        assert!(parsed.is_err());
    }
}

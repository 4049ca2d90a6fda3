//! Response validation: AI output text to structured records
//!
//! The validator is a pass/fail gate with diagnostic detail, not a repair
//! mechanism. A response that fails validation produces no records at all;
//! the operator retries, optionally with a different model.

use crate::record::entities::StructuredRecord;
use crate::schema::entities::QuestionSchema;
use serde_json::Value;
use thiserror::Error;

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq)]
pub enum FieldIssueKind {
    /// A required field is absent
    Missing,
    /// The field is present but has the wrong JSON type
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The field is not declared by the schema
    Undeclared,
}

/// One field-level diagnostic within a [`ValidationFailure::SchemaMismatch`]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    /// Zero-based index of the record within the response
    pub record_index: usize,
    /// Field name
    pub field: String,
    pub kind: FieldIssueKind,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FieldIssueKind::Missing => write!(
                f,
                "record {}: required field '{}' is missing",
                self.record_index + 1,
                self.field
            ),
            FieldIssueKind::TypeMismatch { expected, found } => write!(
                f,
                "record {}: field '{}' should be {} but is {}",
                self.record_index + 1,
                self.field,
                expected,
                found
            ),
            FieldIssueKind::Undeclared => write!(
                f,
                "record {}: field '{}' is not declared by the schema",
                self.record_index + 1,
                self.field
            ),
        }
    }
}

/// Validation failure for an entire AI response
#[derive(Error, Debug)]
pub enum ValidationFailure {
    #[error("Response is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("Response JSON must be an object or an array of objects")]
    NotAnObject,

    #[error("Response contained no questions")]
    Empty,

    #[error("Response does not match the schema:\n{}", format_issues(.0))]
    SchemaMismatch(Vec<FieldIssue>),
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("  - {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

impl ValidationFailure {
    /// Names of missing required fields, across all records
    pub fn missing_fields(&self) -> Vec<&str> {
        match self {
            ValidationFailure::SchemaMismatch(issues) => issues
                .iter()
                .filter(|i| i.kind == FieldIssueKind::Missing)
                .map(|i| i.field.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Validate raw AI response text against a schema.
///
/// Accepts a single JSON object or an array of objects (the prompt asks for
/// an array, one element per question). All elements must pass: a single
/// failing element fails the whole response and no records are produced.
pub fn validate_response(
    raw_text: &str,
    schema: &QuestionSchema,
) -> Result<Vec<StructuredRecord>, ValidationFailure> {
    let value = extract_json_from_text(raw_text)?;

    let items: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::Object(_) => vec![value],
        _ => return Err(ValidationFailure::NotAnObject),
    };

    if items.is_empty() {
        return Err(ValidationFailure::Empty);
    }

    let mut issues = Vec::new();
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(map) = item else {
            return Err(ValidationFailure::NotAnObject);
        };

        for field in &schema.fields {
            match map.get(&field.name) {
                None if field.required => issues.push(FieldIssue {
                    record_index: index,
                    field: field.name.clone(),
                    kind: FieldIssueKind::Missing,
                }),
                None => {}
                Some(value) if !field.field_type.matches(value) => issues.push(FieldIssue {
                    record_index: index,
                    field: field.name.clone(),
                    kind: FieldIssueKind::TypeMismatch {
                        expected: field.field_type.name(),
                        found: json_type_name(value),
                    },
                }),
                Some(_) => {}
            }
        }

        for name in map.keys() {
            if schema.field(name).is_none() {
                issues.push(FieldIssue {
                    record_index: index,
                    field: name.clone(),
                    kind: FieldIssueKind::Undeclared,
                });
            }
        }

        records.push(StructuredRecord::from_values(map));
    }

    if issues.is_empty() {
        Ok(records)
    } else {
        Err(ValidationFailure::SchemaMismatch(issues))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract a JSON value from raw model output.
///
/// Models frequently wrap JSON in Markdown code fences or surround it with
/// prose. Tries, in order: the whole trimmed text, the outermost braced or
/// bracketed slice, a ```json fence, a bare ``` fence.
pub fn extract_json_from_text(s: &str) -> Result<Value, ValidationFailure> {
    let t = s.trim().trim_matches('\u{feff}');

    if t.is_empty() {
        return Err(ValidationFailure::MalformedJson("empty response".into()));
    }

    let first_error = match serde_json::from_str::<Value>(t) {
        Ok(v) => return Ok(v),
        Err(e) => e,
    };

    for (open, close) in [('{', '}'), ('[', ']')] {
        if let Some(i) = t.find(open)
            && let Some(j) = t.rfind(close)
            && i < j
            && let Ok(v) = serde_json::from_str::<Value>(&t[i..=j])
        {
            return Ok(v);
        }
    }

    for fence in ["```json", "```"] {
        if let Some(start) = t.find(fence)
            && let Some(end) = t[start + fence.len()..].find("```")
        {
            let block = &t[start + fence.len()..start + fence.len() + end];
            if let Ok(v) = serde_json::from_str::<Value>(block) {
                return Ok(v);
            }
        }
    }

    Err(ValidationFailure::MalformedJson(first_error.to_string()))
}

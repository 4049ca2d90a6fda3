//! Structured records and response validation

pub mod entities;
pub mod validator;

pub use entities::StructuredRecord;
pub use validator::{
    FieldIssue, FieldIssueKind, ValidationFailure, extract_json_from_text, validate_response,
};

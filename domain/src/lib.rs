//! Domain layer for examforge
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## QuestionSchema
//!
//! A user-defined structural contract for one question type: ordered field
//! definitions (name, type, required flag) plus the prompt template that
//! instructs the AI backend.
//!
//! ## StructuredRecord
//!
//! One validated question in the field layout of its schema. Immutable once
//! the validator has produced it; the exporter trusts it completely.

pub mod core;
pub mod prompt;
pub mod record;
pub mod schema;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use prompt::PromptTemplate;
pub use record::{
    FieldIssue, FieldIssueKind, StructuredRecord, ValidationFailure, extract_json_from_text,
    validate_response,
};
pub use schema::{
    FieldDefinition, FieldType, QuestionSchema, TEXT_PLACEHOLDER, default_schemas,
};
pub use util::{estimate_tokens, truncate_str};

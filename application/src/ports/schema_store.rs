//! Schema store port
//!
//! CRUD access to persisted question-type schemas.

use examforge_domain::{DomainError, QuestionSchema};
use thiserror::Error;

/// Errors from schema store operations
#[derive(Error, Debug)]
pub enum SchemaStoreError {
    #[error("Unknown question type: {0}")]
    NotFound(String),

    #[error("Question type '{0}' already exists")]
    AlreadyExists(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("Schema storage error: {0}")]
    Storage(String),
}

/// Persistent store of question-type schemas
///
/// Read-mostly, edited by a single operator; implementations replace the
/// backing document atomically on every write.
pub trait SchemaStore: Send + Sync {
    /// Add a new schema. Fails with `AlreadyExists` if the id is taken.
    fn create(&self, schema: QuestionSchema) -> Result<(), SchemaStoreError>;

    /// Replace an existing schema. Fails with `NotFound` for unknown ids.
    fn update(&self, id: &str, schema: QuestionSchema) -> Result<(), SchemaStoreError>;

    /// Remove a schema. Fails with `NotFound` for unknown ids.
    fn delete(&self, id: &str) -> Result<(), SchemaStoreError>;

    /// Fetch one schema by id
    fn get(&self, id: &str) -> Result<QuestionSchema, SchemaStoreError>;

    /// All schemas, in stored order
    fn list(&self) -> Result<Vec<QuestionSchema>, SchemaStoreError>;
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown question type: {0}")]
    SchemaNotFound(String),

    #[error("Invalid schema definition: {0}")]
    InvalidSchema(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Empty question text")]
    EmptyText,
}

//! Question-type schemas: the structural contract for one question type

pub mod defaults;
pub mod entities;

pub use defaults::default_schemas;
pub use entities::{FieldDefinition, FieldType, QuestionSchema, TEXT_PLACEHOLDER};

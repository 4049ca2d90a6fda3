//! Application layer for examforge
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{ConversionProgress, NoProgress},
    record_exporter::{ExportError, RecordExporter},
    schema_store::{SchemaStore, SchemaStoreError},
};
pub use use_cases::{
    ConvertTextError, ConvertTextInput, ConvertTextOutput, ConvertTextUseCase,
    ExportRecordsError, ExportRecordsUseCase, ManageSchemasUseCase,
};

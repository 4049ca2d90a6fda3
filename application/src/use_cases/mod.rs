//! Application use cases

pub mod convert_text;
pub mod export_records;
pub mod manage_schemas;

pub use convert_text::{
    ConvertTextError, ConvertTextInput, ConvertTextOutput, ConvertTextUseCase,
};
pub use export_records::{ExportRecordsError, ExportRecordsUseCase};
pub use manage_schemas::ManageSchemasUseCase;

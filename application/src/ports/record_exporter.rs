//! Record exporter port

use examforge_domain::{QuestionSchema, StructuredRecord};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from spreadsheet export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot write to {path}: {message}")]
    Unwritable { path: String, message: String },

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
}

/// Writes a batch of validated records to a spreadsheet file
///
/// Implementations perform no validation — every record they receive has
/// already satisfied its schema. Column order follows schema field order.
pub trait RecordExporter: Send + Sync {
    /// Export records for one schema into a single sheet.
    ///
    /// When `dest` is `None`, the implementation picks a timestamped
    /// filename in its configured output directory. Returns the path of
    /// the written file.
    fn export(
        &self,
        records: &[StructuredRecord],
        schema: &QuestionSchema,
        dest: Option<&Path>,
    ) -> Result<PathBuf, ExportError>;
}

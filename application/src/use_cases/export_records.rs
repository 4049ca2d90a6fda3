//! Export Records use case.
//!
//! Hands a batch of already-validated records to the exporter. The batch is
//! written once and never mutated afterward; the exporter performs no
//! validation of its own.

use crate::ports::record_exporter::{ExportError, RecordExporter};
use examforge_domain::{QuestionSchema, StructuredRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors from the export flow.
#[derive(Error, Debug)]
pub enum ExportRecordsError {
    #[error("Nothing to export")]
    NoRecords,

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Use case for exporting a batch of records to a spreadsheet.
pub struct ExportRecordsUseCase {
    exporter: Arc<dyn RecordExporter>,
}

impl ExportRecordsUseCase {
    pub fn new(exporter: Arc<dyn RecordExporter>) -> Self {
        Self { exporter }
    }

    /// Write `records` to a spreadsheet, returning the file path.
    pub fn execute(
        &self,
        records: &[StructuredRecord],
        schema: &QuestionSchema,
        dest: Option<&Path>,
    ) -> Result<PathBuf, ExportRecordsError> {
        if records.is_empty() {
            return Err(ExportRecordsError::NoRecords);
        }

        let path = self.exporter.export(records, schema, dest)?;
        info!(
            "Exported {} record(s) of '{}' to {}",
            records.len(),
            schema.id,
            path.display()
        );
        Ok(path)
    }
}

//! XLSX record exporter
//!
//! One batch, one sheet. The header row and column order follow the schema's
//! field order; cell types follow the field types. Records arriving here
//! have already passed validation, so lookups that miss simply leave the
//! cell blank (optional fields).

use chrono::Local;
use examforge_application::ports::record_exporter::{ExportError, RecordExporter};
use examforge_domain::{FieldType, QuestionSchema, StructuredRecord};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Excel sheet names are capped at 31 characters
const MAX_SHEET_NAME: usize = 31;

/// Writes validated records to an .xlsx file
pub struct XlsxRecordExporter {
    output_dir: PathBuf,
}

impl XlsxRecordExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn default_path(&self, schema: &QuestionSchema) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        self.output_dir
            .join(format!("{}_{}.xlsx", schema.id, timestamp))
    }

    fn write_sheet(
        sheet: &mut Worksheet,
        records: &[StructuredRecord],
        schema: &QuestionSchema,
    ) -> Result<(), XlsxError> {
        sheet.set_name(sheet_name(&schema.name))?;

        let header_format = Format::new().set_bold();
        for (col, field) in schema.fields.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, &field.name, &header_format)?;
        }

        for (row, record) in records.iter().enumerate() {
            let row = (row + 1) as u32;
            for (col, field) in schema.fields.iter().enumerate() {
                let col = col as u16;
                match record.get(&field.name) {
                    None => {}
                    Some(Value::Bool(b)) if field.field_type == FieldType::Boolean => {
                        sheet.write_boolean(row, col, *b)?;
                    }
                    Some(value @ Value::Number(n)) if field.field_type == FieldType::Number => {
                        // Fall back to text rather than inventing a value
                        match n.as_f64() {
                            Some(number) => sheet.write_number(row, col, number)?,
                            None => sheet.write_string(row, col, cell_text(value))?,
                        };
                    }
                    Some(value) => {
                        sheet.write_string(row, col, cell_text(value))?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl RecordExporter for XlsxRecordExporter {
    fn export(
        &self,
        records: &[StructuredRecord],
        schema: &QuestionSchema,
        dest: Option<&Path>,
    ) -> Result<PathBuf, ExportError> {
        let path = dest
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_path(schema));

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| ExportError::Unwritable {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        Self::write_sheet(sheet, records, schema)
            .map_err(|e| ExportError::Spreadsheet(e.to_string()))?;

        workbook.save(&path).map_err(|e| match e {
            XlsxError::IoError(io) => ExportError::Unwritable {
                path: path.display().to_string(),
                message: io.to_string(),
            },
            other => ExportError::Spreadsheet(other.to_string()),
        })?;

        debug!(
            "Wrote {} record(s) to {}",
            records.len(),
            path.display()
        );
        Ok(path)
    }
}

/// Render a non-scalar value as canonical cell text.
///
/// Lists join with ", "; maps render sorted "key: value" pairs joined with
/// "; ". Scalars fall back to their JSON display form.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by_key(|(k, _)| k.as_str());
            entries
                .into_iter()
                .map(|(k, v)| match v {
                    Value::String(s) => format!("{}: {}", k, s),
                    other => format!("{}: {}", k, other),
                })
                .collect::<Vec<_>>()
                .join("; ")
        }
        other => other.to_string(),
    }
}

fn sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => ' ',
            c => c,
        })
        .collect();
    cleaned.chars().take(MAX_SHEET_NAME).collect()
}

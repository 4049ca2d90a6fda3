//! Spreadsheet export adapters

mod xlsx;

pub use xlsx::XlsxRecordExporter;

//! Presentation layer for examforge
//!
//! This crate contains CLI definitions, output formatters,
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ConvertArgs, RecordFormat, SchemaCommand};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SimpleProgress, SpinnerProgress};

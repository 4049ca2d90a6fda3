//! CLI argument parsing

pub mod commands;

pub use commands::{Cli, Command, ConvertArgs, RecordFormat, SchemaCommand};

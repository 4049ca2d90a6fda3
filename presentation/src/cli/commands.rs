//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for converted records
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RecordFormat {
    /// Human-readable field-by-field listing
    Pretty,
    /// Raw JSON array
    Json,
}

/// CLI arguments for examforge
#[derive(Parser, Debug)]
#[command(name = "examforge")]
#[command(author, version, about = "Convert raw exam questions to structured records via AI")]
#[command(long_about = r#"
examforge sends raw multiple-choice question text to an AI backend (DeepSeek
or Qwen), validates the JSON reply against a question-type schema, and can
export the result to an XLSX spreadsheet.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./examforge.toml      Project-level config
3. ~/.config/examforge/config.toml   Global config

API keys are read from DEEPSEEK_API_KEY / DASHSCOPE_API_KEY unless
configured otherwise.

Example:
  examforge convert -s single_choice -m qwen-plus --input questions.txt --export
  examforge schema list
  examforge models
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Print configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert raw question text into structured records
    Convert(ConvertArgs),

    /// Manage question-type schemas
    Schema {
        #[command(subcommand)]
        command: SchemaCommand,
    },

    /// List the available models
    Models,
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Raw question text (reads --input or stdin when omitted)
    pub text: Option<String>,

    /// Question-type schema id (e.g. single_choice)
    #[arg(short, long, value_name = "ID")]
    pub schema: Option<String>,

    /// Model to use for the conversion
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Read question text from a file
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Export the records to an XLSX file after conversion
    #[arg(short, long)]
    pub export: bool,

    /// Explicit export destination (implies --export)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// How to print the converted records
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: RecordFormat,
}

#[derive(Subcommand, Debug)]
pub enum SchemaCommand {
    /// List all question types
    List,

    /// Show one question type in full
    Show {
        /// Schema id
        id: String,
    },

    /// Add a question type from a JSON definition file
    Add {
        /// Path to the JSON definition
        file: PathBuf,
    },

    /// Replace a question type with a new JSON definition
    Update {
        /// Schema id
        id: String,
        /// Path to the JSON definition
        file: PathBuf,
    },

    /// Delete a question type
    Delete {
        /// Schema id
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_args_parse() {
        let cli = Cli::parse_from([
            "examforge", "convert", "-s", "single_choice", "-m", "qwen-max", "--export",
            "2+2=?",
        ]);
        let Some(Command::Convert(args)) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.schema.as_deref(), Some("single_choice"));
        assert_eq!(args.model.as_deref(), Some("qwen-max"));
        assert!(args.export);
        assert_eq!(args.text.as_deref(), Some("2+2=?"));
    }

    #[test]
    fn test_schema_subcommands_parse() {
        let cli = Cli::parse_from(["examforge", "schema", "delete", "true_false"]);
        let Some(Command::Schema { command }) = cli.command else {
            panic!("expected schema");
        };
        assert!(matches!(command, SchemaCommand::Delete { id } if id == "true_false"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["examforge", "models", "-vv", "--no-config"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
    }

    #[test]
    fn test_show_config_needs_no_subcommand() {
        let cli = Cli::parse_from(["examforge", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

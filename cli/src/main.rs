//! CLI entrypoint for examforge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use examforge_application::ports::progress::{ConversionProgress, NoProgress};
use examforge_application::{
    ConvertTextInput, ConvertTextUseCase, ExportRecordsUseCase, LlmGateway, ManageSchemasUseCase,
};
use examforge_domain::{Model, QuestionSchema};
use examforge_infrastructure::{
    ConfigLoader, DeepseekGateway, FileConfig, JsonSchemaStore, ProviderAdapter, QwenGateway,
    RoutingGateway, Severity, XlsxRecordExporter,
};
use examforge_presentation::{
    Cli, Command, ConsoleFormatter, ConvertArgs, RecordFormat, SchemaCommand, SimpleProgress,
    SpinnerProgress,
};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting examforge");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run with --help for usage.");
    };

    // Load and validate configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let issues = config.validate();
    let mut fatal = false;
    for issue in &issues {
        match issue.severity {
            Severity::Warning => eprintln!("{}", issue),
            Severity::Error => {
                eprintln!("{}", issue);
                fatal = true;
            }
        }
    }
    if fatal {
        bail!("Configuration is invalid; fix the errors above and retry");
    }

    match command {
        Command::Convert(args) => run_convert(args, &config, cli.quiet, cli.verbose).await,
        Command::Schema { command } => run_schema(command, &config),
        Command::Models => run_models(&config),
    }
}

// ==================== convert ====================

async fn run_convert(
    args: ConvertArgs,
    config: &FileConfig,
    quiet: bool,
    verbose: u8,
) -> Result<()> {
    let raw_text = read_question_text(&args)?;

    let schema_id = args
        .schema
        .or_else(|| config.conversion.default_schema.clone());
    let Some(schema_id) = schema_id else {
        bail!("No schema given. Pass --schema <ID> or set [conversion] default_schema.");
    };

    let model: Model = match args.model {
        Some(name) => name.parse().unwrap_or_default(),
        None => config.conversion.parse_default_model(),
    };

    let store = Arc::new(
        JsonSchemaStore::open(&config.schemas.path).context("Failed to open schema store")?,
    );
    let gateway = Arc::new(build_gateway(config));
    let use_case = ConvertTextUseCase::new(gateway, store);

    // A live spinner and log lines fight over the terminal; verbose runs
    // get plain-text progress instead.
    let progress: Box<dyn ConversionProgress> = if quiet {
        Box::new(NoProgress)
    } else if verbose > 0 {
        Box::new(SimpleProgress)
    } else {
        Box::new(SpinnerProgress::new())
    };

    let input = ConvertTextInput::new(raw_text, schema_id, model);
    let output = use_case.execute(input, progress.as_ref()).await?;

    match args.format {
        RecordFormat::Pretty => {
            println!(
                "{}",
                ConsoleFormatter::format_records(&output.records, &output.schema)
            );
        }
        RecordFormat::Json => {
            println!("{}", ConsoleFormatter::format_records_json(&output.records));
        }
    }

    if args.export || args.out.is_some() {
        let exporter = Arc::new(XlsxRecordExporter::new(config.export.output_dir.clone()));
        let export = ExportRecordsUseCase::new(exporter);
        let path = export.execute(&output.records, &output.schema, args.out.as_deref())?;
        println!("Exported to {}", path.display());
    }

    Ok(())
}

/// Question text comes from the positional argument, --input, or stdin,
/// in that order.
fn read_question_text(args: &ConvertArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    debug!("Reading question text from stdin");
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read question text from stdin")?;
    Ok(buffer)
}

// ==================== schema ====================

fn run_schema(command: SchemaCommand, config: &FileConfig) -> Result<()> {
    let store = Arc::new(
        JsonSchemaStore::open(&config.schemas.path).context("Failed to open schema store")?,
    );
    let use_case = ManageSchemasUseCase::new(store);

    match command {
        SchemaCommand::List => {
            let schemas = use_case.list()?;
            print!("{}", ConsoleFormatter::format_schema_list(&schemas));
        }
        SchemaCommand::Show { id } => {
            let schema = use_case.get(&id)?;
            print!("{}", ConsoleFormatter::format_schema(&schema));
        }
        SchemaCommand::Add { file } => {
            let schema = read_schema_file(&file)?;
            let id = schema.id.clone();
            use_case.create(schema)?;
            println!("Added question type '{}'", id);
        }
        SchemaCommand::Update { id, file } => {
            let schema = read_schema_file(&file)?;
            use_case.update(&id, schema)?;
            println!("Updated question type '{}'", id);
        }
        SchemaCommand::Delete { id } => {
            use_case.delete(&id)?;
            println!("Deleted question type '{}'", id);
        }
    }

    Ok(())
}

fn read_schema_file(path: &PathBuf) -> Result<QuestionSchema> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid schema definition", path.display()))
}

// ==================== models ====================

fn run_models(config: &FileConfig) -> Result<()> {
    let gateway = build_gateway(config);
    let available = gateway.available_models();
    print!(
        "{}",
        ConsoleFormatter::format_models(&available, config.conversion.parse_default_model())
    );
    Ok(())
}

// ==================== dependency injection ====================

/// Build the routing gateway from whichever providers have credentials.
///
/// A provider without a usable API key is simply left out; requests for its
/// models then fail with a clear "not configured" error instead of an auth
/// failure mid-flight.
fn build_gateway(config: &FileConfig) -> RoutingGateway {
    let temperature = config.conversion.temperature;
    let mut adapters: Vec<Arc<dyn ProviderAdapter>> = Vec::new();

    if config.providers.deepseek.resolve_api_key().is_some() {
        match DeepseekGateway::new(&config.providers.deepseek, temperature) {
            Ok(gateway) => adapters.push(Arc::new(gateway)),
            Err(e) => debug!("DeepSeek adapter unavailable: {}", e),
        }
    } else {
        debug!("DeepSeek adapter skipped: no API key configured");
    }

    if config.providers.qwen.resolve_api_key().is_some() {
        match QwenGateway::new(&config.providers.qwen, temperature) {
            Ok(gateway) => adapters.push(Arc::new(gateway)),
            Err(e) => debug!("Qwen adapter unavailable: {}", e),
        }
    } else {
        debug!("Qwen adapter skipped: no API key configured");
    }

    RoutingGateway::new(adapters)
}

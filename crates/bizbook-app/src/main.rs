use std::path::PathBuf;
use std::process::ExitCode;

use bizbook_app::import::import_file;
use bizbook_app::render::{ImportFailure, render};
use bizbook_core::config::{OutputFormat, load_config};
use bizbook_core::constants::DEFAULT_LOG_LEVEL;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "bizbook-import",
    version,
    about = "Import contacts from vCard (.vcf) address-book exports"
)]
struct Cli {
    /// Output mode: "pretty" for one line per contact, "json" for
    /// machine-readable output. Defaults to `import.output` from settings.
    #[arg(long, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Settings file to use instead of `config.toml`.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// VCF files to import.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping default");
    }

    let format = match cli.output.as_deref() {
        Some(output) => output.parse::<OutputFormat>()?,
        None => config.import.output,
    };

    let mut summaries = Vec::new();
    let mut failures = Vec::new();

    for path in &cli.files {
        match import_file(path, &config.import) {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                tracing::error!(file = %path.display(), error = %e, "Import failed");
                failures.push(ImportFailure {
                    file: path.display().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    render(&summaries, &failures, format, &mut std::io::stdout().lock())?;

    Ok(if failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

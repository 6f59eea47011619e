//! CLI entry point for the canteen survey analyzer.
//!
//! Loads a semicolon-delimited survey export, aggregates it per canteen and
//! writes the JSON files the feedback dashboard reads.

use anyhow::Result;
use cantina_analyzer::analyzers::analyzer::{analyze, summarize};
use cantina_analyzer::output::print_json;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "cantina_analyzer")]
#[command(about = "Aggregate canteen survey answers into dashboard JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every view and write the five JSON files
    Analyze {
        /// Semicolon-delimited survey export
        #[arg(value_name = "INPUT", default_value = "avaliacoes.csv")]
        input: String,

        /// Directory to write the JSON files to
        #[arg(short, long, default_value = ".")]
        output_dir: String,
    },
    /// Log headline figures for a survey without writing anything
    Summary {
        /// Semicolon-delimited survey export
        #[arg(value_name = "INPUT", default_value = "avaliacoes.csv")]
        input: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/cantina_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("cantina_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { input, output_dir } => {
            let report = analyze(Path::new(&input), Path::new(&output_dir))?;
            info!(
                canteens = report.averages.len(),
                output_dir = %output_dir,
                "Dashboard data ready"
            );
        }
        Commands::Summary { input } => {
            let summary = summarize(Path::new(&input))?;
            print_json(&summary)?;
        }
    }

    Ok(())
}

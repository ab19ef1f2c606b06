use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use stockdash::application::pipeline;
use stockdash::config::{
    DEFAULT_INPUT_PATH, DEFAULT_JSON_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_SCRIPT_NAME, PipelineConfig,
};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Builds the stock dashboard dataset from a CSV of daily quotes", long_about = None)]
struct Cli {
    /// CSV of daily quotes (ticker, date, close, volume, open, high, low)
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Directory receiving both output files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// JSON output file name
    #[arg(long, default_value = DEFAULT_JSON_NAME)]
    json_name: String,

    /// Script output file name
    #[arg(long, default_value = DEFAULT_SCRIPT_NAME)]
    script_name: String,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();

    let config = PipelineConfig {
        input_path: cli.input,
        output_dir: cli.output_dir,
        json_name: cli.json_name,
        script_name: cli.script_name,
        ..PipelineConfig::default()
    };

    let summary = pipeline::run(&config).with_context(|| {
        format!(
            "Failed to build dashboard data from {}",
            config.input_path.display()
        )
    })?;

    info!(
        "Done: {} records, {} companies ({} rows dropped)",
        summary.total_records, summary.companies, summary.dropped_rows
    );

    Ok(())
}

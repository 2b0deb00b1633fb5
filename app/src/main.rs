mod config;
mod dto;
mod infrastructure;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use domain::service::JobSpecService;
use tracing_subscriber::{fmt, EnvFilter};

use self::config::{build_config, BatchConfig};
use self::dto::{RequestDocument, SubmitJobPayload};
use self::infrastructure::ioc::Container;

/// Turn RFDesign requests into batch job submissions.
#[derive(Debug, Parser)]
#[command(name = "rfdesign-batch", version)]
struct Cli {
    /// JSON file holding one design request or an array of them
    requests: PathBuf,
    /// Configuration file, `config.yaml` in the working directory by default
    #[arg(long, short, env = "RFDESIGN_CONFIG")]
    config: Option<PathBuf>,
    /// Write the submissions here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(cli.config.as_deref()).with_context(|| "Failed to build config".red())?;
    let batch_config: BatchConfig = config.try_deserialize()?;

    init_logging(&batch_config.log_level).with_context(|| "Failed to initialize logger".red())?;

    let raw = std::fs::read_to_string(&cli.requests)
        .with_context(|| format!("Cannot read {}", cli.requests.display()).red())?;
    let requests = serde_json::from_str::<RequestDocument>(&raw)
        .with_context(|| "Malformed request document".red())?
        .into_requests();

    let container = Container::new(&batch_config);
    let mut payloads = Vec::with_capacity(requests.len());
    for (index, request) in requests.iter().enumerate() {
        let spec = container
            .construct(request.mode(), request.params())
            .with_context(|| format!("Request #{index} rejected").red())?;
        let overrides =
            container.take_overrides().context("No container overrides were defined")?;
        payloads.push(SubmitJobPayload::new(&spec, overrides));
    }
    tracing::info!(jobs = payloads.len(), "Job submissions prepared");

    let json = serde_json::to_string_pretty(&payloads)?;
    match &cli.output {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("Cannot write {}", path.display()).red())?,
        None => println!("{json}"),
    }
    Ok(())
}

// stdout carries the submissions, so logs go to stderr
fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
}

// Artifact trust scoring CLI
//
// Reads a file of comma-separated model, dataset and code URLs, scores each one
// and prints one NDJSON record per URL to stdout. Logs go to LOG_FILE (or
// stderr) at the verbosity selected by LOG_LEVEL.

use anyhow::{Context, Result};
use artifact_trust::artifact::{RunSummary, ScoreRecord, read_url_file};
use artifact_trust::{EngineConfig, LogConfig, ScoringEngine, SizePolicy};
use clap::Parser;
use log::{info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "artifact-trust")]
#[command(about = "Score the trustworthiness of ML models, datasets and code repositories")]
struct Cli {
    /// File of URLs, one or more comma-separated per line
    url_file: PathBuf,

    /// How artifact sizes are estimated for hardware compatibility
    #[arg(long, value_enum, default_value_t = SizePolicy::Conservative)]
    size_policy: SizePolicy,

    /// Per-request timeout in seconds
    #[arg(long, env = "ARTIFACT_TRUST_TIMEOUT")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LogConfig::from_env()
        .init()
        .context("Failed to initialize logging")?;

    let records = read_url_file(&cli.url_file)
        .with_context(|| format!("Failed to read URL file {}", cli.url_file.display()))?;
    info!("Loaded {} URLs from {}", records.len(), cli.url_file.display());

    let mut config = EngineConfig::from_env();
    config.size_policy = cli.size_policy;
    if let Some(secs) = cli.timeout {
        config.fetch.api_timeout = Duration::from_secs(secs);
    }
    let engine = ScoringEngine::new(config).context("Failed to build HTTP client")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut results = Vec::with_capacity(records.len());

    for record in &records {
        if !record.is_valid() {
            warn!("Unrecognized URL: {}", record.link());
        }
        let start = Instant::now();
        let result = engine.score_record(record).await;
        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!("{} {result}", record.link());

        let line = ScoreRecord::new(&result, latency_ms)
            .to_ndjson_line()
            .context("Failed to serialize score record")?;
        writeln!(out, "{line}").context("Failed to write to stdout")?;
        results.push(result);
    }
    out.flush().context("Failed to flush stdout")?;

    info!("{}", RunSummary::from_results(&results));
    Ok(())
}

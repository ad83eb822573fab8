//! depsmoke
//!
//! Serializes a record to YAML, opens a Redis client handle and mounts an
//! HTTP router, then exits. No network traffic is generated.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use depsmoke_cli::{Args, SmokeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.default_log_filter().into()),
        )
        .init();

    let config = SmokeConfig::load(args.config.as_deref())?.apply(args.overrides());

    let stdout = std::io::stdout();
    let report = depsmoke_cli::run(&config, &mut stdout.lock())?;

    tracing::info!(cache = %report.cache, mounted_at = report.mounted_at, "Smoke run completed");
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use reqwest::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod monitor;
pub mod probe;
pub mod stats;

use config::load_endpoints;

/// Periodic HTTP health-check agent.
///
/// Probes every configured endpoint concurrently once per cycle and
/// reports cumulative per-domain availability after each cycle.
#[derive(Debug, Parser)]
#[command(name = "upwatch", version, about)]
struct Args {
    /// Path to the YAML configuration file (a sequence of endpoint
    /// definitions).
    config_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let endpoints = load_endpoints(&args.config_file)
        .with_context(|| format!("could not load {}", args.config_file.display()))?;

    // One shared client for the whole process; connections are pooled and
    // reused across cycles. Every request also carries an explicit
    // per-probe timeout.
    let client = Client::builder()
        .timeout(probe::PROBE_TIMEOUT)
        .user_agent(concat!("upwatch/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    tokio::select! {
        _ = monitor::run(client, endpoints) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down health check agent.");
        }
    }

    Ok(())
}

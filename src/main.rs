//! AutoDeploy - Entry Point
//!
//! Parses CLI flags, installs tracing (to a file, since stdout hosts the
//! TUI), loads the optional config overlay, and runs the dashboard.

use autodeploy::core::config::ConsoleConfig;
use autodeploy::core::error::Result;
use autodeploy::ui;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// Terminal dashboard simulating a deployment agent workflow
#[derive(Parser, Debug)]
#[command(name = "autodeploy")]
#[command(about = "Simulated deployment console (no real builds, no network)")]
struct Args {
    /// Optional TOML config overlay
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file
    #[arg(long)]
    debug_log: Option<PathBuf>,

    /// Override the event loop poll interval in milliseconds
    #[arg(long)]
    poll_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging to stdout would corrupt the alternate screen, so tracing is
    // only installed when a log file is requested.
    if let Some(path) = &args.debug_log {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter("autodeploy=debug")
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let mut config = match &args.config {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::new(),
    };
    if let Some(ms) = args.poll_ms {
        config.poll_interval_ms = ms;
        config.validate()?;
    }

    tracing::info!("AutoDeploy console starting");
    ui::run(&config)
}

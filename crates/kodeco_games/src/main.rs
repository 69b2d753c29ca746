//! Kodeco Games - play tic-tac-toe against your own AI in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use kodeco_games::{Cli, ShellConfig};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::load(&cli)?;

    init_logging(config.log_file())?;
    info!(?config, "Configuration resolved");

    kodeco_games::tui::run(config).await
}

/// Sends log output to a file so it does not draw over the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

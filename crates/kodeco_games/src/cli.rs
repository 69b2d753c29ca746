//! Command-line interface for kodeco_games.

use crate::FirstPlayer;
use clap::Parser;
use std::path::PathBuf;

/// Kodeco Games - play tic-tac-toe against your own AI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "kodeco_games")]
#[command(about = "Play tic-tac-toe against a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random fallback move
    #[arg(long)]
    pub seed: Option<u64>,

    /// Who opens each game
    #[arg(long, value_enum)]
    pub first_player: Option<FirstPlayer>,

    /// File that receives the log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

//! Shell configuration: file values first, command-line flags on top.

use crate::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use kodeco_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Which side takes the first move in each game.
///
/// Defaults to [`FirstPlayer::Human`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstPlayer {
    /// The person at the keyboard opens.
    #[default]
    Human,
    /// The computer opens.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "You",
            Self::Computer => "Computer",
        }
    }
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::Human => Player::Human,
            FirstPlayer::Computer => Player::Computer,
        }
    }
}

/// Settings for the terminal shell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Pause before the computer's reply is applied, in milliseconds.
    computer_delay_ms: u64,

    /// Seed for the random tier. `None` draws a fresh seed each run.
    seed: Option<u64>,

    /// Who opens each game.
    first_player: FirstPlayer,

    /// Where log output goes.
    log_file: PathBuf,
}

fn default_computer_delay_ms() -> u64 {
    350
}

fn default_log_file() -> PathBuf {
    PathBuf::from("kodeco_games.log")
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
            first_player: FirstPlayer::default(),
            log_file: default_log_file(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            delay_ms = config.computer_delay_ms,
            seed = ?config.seed,
            first_player = %config.first_player,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Builds the effective configuration for a run.
    ///
    /// Reads `--config` when given, then applies the other flags on top.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Replaces every value the command line sets explicitly.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(delay) = cli.delay_ms {
            self.computer_delay_ms = delay;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(first) = cli.first_player {
            self.first_player = first;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        self
    }

    /// The computer's reply delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

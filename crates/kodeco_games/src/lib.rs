//! Kodeco Games: a terminal front end for tic-tac-toe against the computer.
//!
//! The rules and the computer's move selection live in
//! [`kodeco_tictactoe`]; this crate adds the shell around them:
//!
//! - **Config**: [`ShellConfig`] from an optional TOML file plus [`Cli`] flags
//! - **TUI**: a ratatui Play/Stats interface driven by [`tui::App`]
//! - **Scoreboard**: in-memory wins, losses and draws for the run
//!
//! # Example
//!
//! ```
//! use kodeco_games::{Cli, ShellConfig, tui::App};
//!
//! let cli = Cli { delay_ms: Some(0), seed: Some(1), ..Cli::default() };
//! let config = ShellConfig::load(&cli)?;
//! let app = App::new(&config);
//! assert_eq!(app.status(), "Your move.");
//! # Ok::<(), kodeco_games::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod alert;
mod cli;
mod config;
mod scoreboard;
pub mod tui;

pub use alert::OutcomeAlert;
pub use cli::Cli;
pub use config::{ConfigError, FirstPlayer, ShellConfig};
pub use scoreboard::Scoreboard;

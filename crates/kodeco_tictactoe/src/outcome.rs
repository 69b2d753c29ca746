//! Derived game outcome.

use super::Player;
use serde::{Deserialize, Serialize};

/// Where the game stands, derived fresh from the board each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Nobody has won and cells remain.
    InProgress,
    /// Player completed a winning pattern.
    Win(Player),
    /// All cells are taken with no winner.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "{} wins", player),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

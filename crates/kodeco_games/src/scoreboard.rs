//! Running tally of finished games for the current run.

use derive_getters::Getters;
use kodeco_tictactoe::{GameOutcome, Player};
use tracing::{debug, instrument};

/// Wins, losses and draws from the human's point of view.
///
/// Lives only as long as the process; nothing is written to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Games still in progress are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::Human) => self.wins += 1,
            GameOutcome::Win(Player::Computer) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => return,
        }
        debug!(wins = self.wins, losses = self.losses, draws = self.draws, "Scoreboard updated");
    }

    /// Number of finished games.
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Share of games won, as a percentage. Zero before any game finishes.
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.wins) * 100.0 / f64::from(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut board = Scoreboard::new();
        board.record(GameOutcome::Win(Player::Human));
        board.record(GameOutcome::Win(Player::Computer));
        board.record(GameOutcome::Win(Player::Computer));
        board.record(GameOutcome::Draw);
        board.record(GameOutcome::InProgress);

        assert_eq!(*board.wins(), 1);
        assert_eq!(*board.losses(), 2);
        assert_eq!(*board.draws(), 1);
        assert_eq!(board.total(), 4);
        assert!((board.win_rate() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_win_rate() {
        assert_eq!(Scoreboard::new().win_rate(), 0.0);
    }
}

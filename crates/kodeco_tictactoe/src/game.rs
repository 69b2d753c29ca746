//! Game lifecycle: creating, resetting and playing into a board, plus a
//! session type that enforces whose turn it is.
//!
//! A turn goes in two phases. The caller applies the human's move and
//! checks the outcome; if the game is still in progress it asks for the
//! computer's reply whenever it likes (right away, or after a pause for
//! animation). The core has no timers and keeps no global state.

use super::resolver::{self, Decision};
use super::rules;
use super::{Board, GameError, GameOutcome, IllegalMoveError, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Creates an empty board for a new game.
#[instrument]
pub fn new_game() -> Board {
    Board::new()
}

/// Replaces the current game with an empty board.
#[instrument]
pub fn reset_game() -> Board {
    new_game()
}

/// Returns a copy of `board` with the human's mark at `position`.
///
/// # Errors
///
/// Returns [`IllegalMoveError`] if `position` is taken. `board` itself is
/// never touched.
#[instrument(skip(board))]
pub fn apply_human_move(board: &Board, position: Position) -> Result<Board, IllegalMoveError> {
    let mut next = board.clone();
    next.place(Player::Human, position)?;
    Ok(next)
}

/// Result of one placement made through [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Who moved.
    pub player: Player,
    /// Where they moved.
    pub position: Position,
    /// The outcome right after the move.
    pub outcome: GameOutcome,
}

/// A single game between the human and the computer.
///
/// Owns its board and tracks whose turn it is. Each call checks that the
/// game is still in progress and that the caller is moving for the right
/// side before touching the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    opening: Player,
}

impl Game {
    /// Creates a new game where `opening` moves first.
    #[instrument]
    pub fn new(opening: Player) -> Self {
        Self {
            board: new_game(),
            to_move: opening,
            opening,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player due to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who opens each game.
    pub fn opening(&self) -> Player {
        self.opening
    }

    /// Derives the current outcome from the board.
    pub fn outcome(&self) -> GameOutcome {
        rules::evaluate(&self.board)
    }

    /// Plays the human's move at `position`.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game already ended
    /// - [`GameError::OutOfTurn`] if the computer is due to move
    /// - [`GameError::IllegalMove`] if the cell is taken
    ///
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(moves = self.board.len()))]
    pub fn play_human(&mut self, position: Position) -> Result<TurnReport, GameError> {
        self.check_turn(Player::Human)?;
        self.board.place(Player::Human, position)?;
        Ok(self.finish_turn(Player::Human, position))
    }

    /// Lets the computer pick and play its move.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game already ended
    /// - [`GameError::OutOfTurn`] if the human is due to move
    #[instrument(skip(self, rng), fields(moves = self.board.len()))]
    pub fn play_computer<R>(&mut self, rng: &mut R) -> Result<(Decision, TurnReport), GameError>
    where
        R: Rng + ?Sized,
    {
        self.check_turn(Player::Computer)?;
        let decision = resolver::decide(&self.board, rng)?;
        self.board.place(Player::Computer, decision.position)?;
        Ok((decision, self.finish_turn(Player::Computer, decision.position)))
    }

    /// Clears the board; the opening player moves first again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(opening = %self.opening, "Resetting game");
        self.board = reset_game();
        self.to_move = self.opening;
    }

    /// Clears the board and changes who opens from now on.
    #[instrument(skip(self))]
    pub fn reset_with(&mut self, opening: Player) {
        self.opening = opening;
        self.reset();
    }

    fn check_turn(&self, player: Player) -> Result<(), GameError> {
        let outcome = self.outcome();
        if outcome.is_over() {
            warn!(%player, %outcome, "Move requested after the game ended");
            return Err(GameError::GameOver { outcome });
        }
        if player != self.to_move {
            warn!(%player, expected = %self.to_move, "Move requested out of turn");
            return Err(GameError::OutOfTurn {
                expected: self.to_move,
            });
        }
        Ok(())
    }

    fn finish_turn(&mut self, player: Player, position: Position) -> TurnReport {
        let outcome = self.outcome();
        if !outcome.is_over() {
            self.to_move = player.opponent();
        }
        info!(%player, %position, %outcome, "Turn complete");
        TurnReport {
            player,
            position,
            outcome,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::Human)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameRng, Tier};

    #[test]
    fn test_apply_human_move_leaves_input_untouched() {
        let board = new_game();
        let next = apply_human_move(&board, Position::Center).unwrap();
        assert!(board.is_empty());
        assert_eq!(next.occupant(Position::Center), Some(Player::Human));

        let err = apply_human_move(&next, Position::Center).unwrap_err();
        assert_eq!(err.occupant, Player::Human);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::default();
        let mut rng = GameRng::new(1);

        let report = game.play_human(Position::TopLeft).unwrap();
        assert_eq!(report.outcome, GameOutcome::InProgress);
        assert_eq!(game.to_move(), Player::Computer);

        assert_eq!(
            game.play_human(Position::TopCenter),
            Err(GameError::OutOfTurn {
                expected: Player::Computer
            })
        );

        let (decision, report) = game.play_computer(&mut rng).unwrap();
        assert_eq!(decision.tier, Tier::Center);
        assert_eq!(report.position, Position::Center);
        assert_eq!(game.to_move(), Player::Human);
    }

    #[test]
    fn test_computer_cannot_move_first_by_default() {
        let mut game = Game::default();
        let mut rng = GameRng::new(1);
        assert!(matches!(
            game.play_computer(&mut rng),
            Err(GameError::OutOfTurn { expected: Player::Human })
        ));
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut game = Game::new(Player::Computer);
        let mut rng = GameRng::new(3);
        game.play_computer(&mut rng).unwrap();

        let before = game.clone();
        let err = game.play_human(Position::Center).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove(_)));
        assert_eq!(game, before);
        assert_eq!(game.to_move(), Player::Human);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = Game::default();
        let mut rng = GameRng::new(9);

        // Human ignores the anti-diagonal and the computer completes it.
        game.play_human(Position::TopLeft).unwrap();
        game.play_computer(&mut rng).unwrap(); // Center
        game.play_human(Position::BottomRight).unwrap();
        game.play_computer(&mut rng).unwrap(); // TopRight (corner)
        game.play_human(Position::TopCenter).unwrap();
        let (decision, report) = game.play_computer(&mut rng).unwrap();

        assert_eq!(decision.tier, Tier::Win);
        assert_eq!(decision.position, Position::BottomLeft);
        assert_eq!(report.outcome, GameOutcome::Win(Player::Computer));
        assert_eq!(
            game.play_human(Position::MiddleLeft),
            Err(GameError::GameOver {
                outcome: GameOutcome::Win(Player::Computer)
            })
        );
    }

    #[test]
    fn test_reset() {
        let mut game = Game::default();
        game.play_human(Position::Center).unwrap();
        game.reset();
        assert!(game.board().is_empty());
        assert_eq!(game.to_move(), Player::Human);

        game.reset_with(Player::Computer);
        assert_eq!(game.to_move(), Player::Computer);
        assert_eq!(game.opening(), Player::Computer);
    }
}

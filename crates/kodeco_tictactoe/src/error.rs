//! Error types for the tic-tac-toe core.

use crate::{GameOutcome, Player, Position};
use derive_more::{Display, Error};

/// A placement targeted a cell that already holds a move.
///
/// The board is never modified when this is returned, so the caller can
/// simply ask for another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{} is already occupied by {}", position, occupant)]
pub struct IllegalMoveError {
    /// The cell that was requested.
    pub position: Position,
    /// Who already holds that cell.
    pub occupant: Player,
}

/// The random fallback was reached with no unoccupied cell left.
///
/// Only happens when a computer move is requested on a full board, which
/// is a caller protocol violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No unoccupied cell left for the computer")]
pub struct ExhaustedBoardError;

/// A cell reference could not be turned into a [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PositionError {
    /// Flat index outside `0..9`.
    #[display("Index {} is outside the board (0-8)", index)]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// Row or column outside `0..3`.
    #[display("Cell ({}, {}) is outside the board", row, column)]
    CellOutOfRange {
        /// The rejected row.
        row: usize,
        /// The rejected column.
        column: usize,
    },

    /// Input matched neither an index, a pair nor a label.
    #[display("Unrecognized position: {:?}", input)]
    Unrecognized {
        /// The rejected input.
        input: String,
    },
}

/// Error that can occur while driving a [`Game`](crate::Game) session.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// The requested cell is taken.
    #[display("{}", _0)]
    IllegalMove(IllegalMoveError),

    /// The computer was asked to move with no cell left.
    #[display("{}", _0)]
    ExhaustedBoard(ExhaustedBoardError),

    /// The game has already reached a terminal outcome.
    #[display("Game is already over: {}", outcome)]
    GameOver {
        /// The outcome that ended the game.
        outcome: GameOutcome,
    },

    /// The other side is due to move.
    #[display("It's {}'s turn", expected)]
    OutOfTurn {
        /// The player whose turn it actually is.
        expected: Player,
    },
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(err) => Some(err),
            GameError::ExhaustedBoard(err) => Some(err),
            GameError::GameOver { .. } | GameError::OutOfTurn { .. } => None,
        }
    }
}

impl From<IllegalMoveError> for GameError {
    fn from(err: IllegalMoveError) -> Self {
        GameError::IllegalMove(err)
    }
}

impl From<ExhaustedBoardError> for GameError {
    fn from(err: ExhaustedBoardError) -> Self {
        GameError::ExhaustedBoard(err)
    }
}

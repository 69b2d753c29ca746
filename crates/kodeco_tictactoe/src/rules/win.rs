//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::{instrument, trace};

/// The 8 lines that win the game.
///
/// Iterated in this order everywhere: rows top to bottom, columns left to
/// right, then the main and anti diagonals.
pub const WINNING_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if `player` holds every cell of some winning pattern.
///
/// Only `player` is evaluated; the function makes no assumption about the
/// other side.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    WINNING_PATTERNS
        .iter()
        .any(|pattern| pattern.iter().all(|&pos| board.occupant(pos) == Some(player)))
}

/// Returns the player with three in a row, if any.
///
/// The human is checked first. A board reached by alternating turns never
/// has two winners.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| has_won(board, player))
}

/// Finds the cell that would complete a line for `player`.
///
/// For each pattern in order, the cells not held by `player` are
/// collected. If exactly one remains and nobody holds it, that cell wins
/// the game for `player` (or blocks them, when asked on behalf of the
/// opponent). Returns `None` when no line is one move from completion.
#[instrument(skip(board))]
pub fn find_immediate_win(player: Player, board: &Board) -> Option<Position> {
    for pattern in &WINNING_PATTERNS {
        let mut missing = pattern
            .iter()
            .copied()
            .filter(|&pos| board.occupant(pos) != Some(player));

        if let (Some(candidate), None) = (missing.next(), missing.next())
            && !board.is_occupied(candidate)
        {
            trace!(?pattern, %candidate, "Line is one move from completion");
            return Some(candidate);
        }
    }

    None
}

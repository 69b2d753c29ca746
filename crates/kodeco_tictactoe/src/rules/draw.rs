//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board holds all 9 moves.
///
/// This does not look for a winner. A full board with three in a row is
/// a win, so check [`has_won`](super::has_won) first.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates
//! state, so the same board always yields the same answers.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WINNING_PATTERNS, find_immediate_win, has_won, winner};

use super::{Board, GameOutcome};
use tracing::{info, instrument};

/// Derives the outcome of the game from the board.
///
/// A win is checked before a draw, so a full board with three in a row
/// counts as a win.
#[instrument(skip(board), fields(moves = board.len()))]
pub fn evaluate(board: &Board) -> GameOutcome {
    let outcome = if let Some(player) = winner(board) {
        GameOutcome::Win(player)
    } else if is_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    };

    if outcome.is_over() {
        info!(%outcome, "Game reached a terminal outcome");
    }
    outcome
}

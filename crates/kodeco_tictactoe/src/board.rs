//! Board state: the record of which cells hold which moves.

use super::{IllegalMoveError, Move, Player, Position};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument, warn};

/// 3x3 tic-tac-toe board.
///
/// A mapping from [`Position`] to the [`Move`] made there. Entries are
/// only ever added; starting over means replacing the board with a fresh
/// one. Counts and outcomes are always derived from the mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardSnapshot", from = "BoardSnapshot")]
pub struct Board {
    cells: BTreeMap<Position, Move>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a move has been made at `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cells.contains_key(&position)
    }

    /// Returns the move at `position`, if any.
    pub fn get(&self, position: Position) -> Option<&Move> {
        self.cells.get(&position)
    }

    /// Returns the player holding `position`, if any.
    pub fn occupant(&self, position: Position) -> Option<Player> {
        self.get(position).map(Move::player)
    }

    /// Places a mark for `player` at `position`.
    ///
    /// Turn order is not checked here; that belongs to whoever drives the
    /// game.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if the cell is already occupied. The
    /// board is left exactly as it was.
    #[instrument(skip(self), fields(moves = self.len()))]
    pub fn place(&mut self, player: Player, position: Position) -> Result<Move, IllegalMoveError> {
        if let Some(existing) = self.cells.get(&position) {
            warn!(occupant = %existing.player(), "Cell already occupied");
            return Err(IllegalMoveError {
                position,
                occupant: existing.player(),
            });
        }

        let mov = Move::new(player, position);
        self.cells.insert(position, mov);
        debug!(%mov, "Move placed");
        Ok(mov)
    }

    /// Number of moves on the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no move has been made yet.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if all 9 cells are taken.
    pub fn is_full(&self) -> bool {
        self.cells.len() == Position::ALL.len()
    }

    /// Moves on the board in row-major order of their cells.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.cells.values()
    }

    /// Cells held by `player`.
    pub fn positions_of(&self, player: Player) -> BTreeSet<Position> {
        self.cells
            .values()
            .filter(|mov| mov.player() == player)
            .map(Move::position)
            .collect()
    }

    /// Unoccupied cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| !self.is_occupied(*pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.occupant(pos) {
                Some(player) => player.mark(),
                None => pos.keypad(),
            };
            result.push(symbol);
            if pos.column() < 2 {
                result.push('|');
            } else if pos.row() < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Serializable view of a board: who holds each occupied cell.
///
/// [`Board`] serializes through this type and can be rebuilt from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSnapshot(pub BTreeMap<Position, Player>);

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        BoardSnapshot::from(&board)
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        BoardSnapshot(
            board
                .cells
                .iter()
                .map(|(pos, mov)| (*pos, mov.player()))
                .collect(),
        )
    }
}

impl From<BoardSnapshot> for Board {
    fn from(snapshot: BoardSnapshot) -> Self {
        Board {
            cells: snapshot
                .0
                .into_iter()
                .map(|(pos, player)| (pos, Move::new(player, pos)))
                .collect(),
        }
    }
}

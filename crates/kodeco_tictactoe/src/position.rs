//! Cell positions on the 3x3 board.
//!
//! Every cell is addressable three ways: as a [`Position`] variant, as a
//! `(row, column)` pair with both coordinates in `0..3`, or as a flat
//! row-major index in `0..9` where `index = row * 3 + column`.

use crate::error::PositionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Variants are declared in row-major order, so the derived `Ord` matches
/// the flat index order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The center cell.
    pub const CENTER: Position = Position::Center;

    /// Corner cells in the order the computer prefers them.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Converts position to its flat row-major index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from a flat row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this cell (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this cell (0-2, left to right).
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Creates position from a row and column, each in `0..3`.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Returns true for the four corner cells.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Keypad digit for this cell, `'1'` top-left through `'9'` bottom-right.
    pub fn keypad(self) -> char {
        match char::from_digit(self.index() as u32 + 1, 10) {
            Some(digit) => digit,
            None => unreachable!("cell index is always below 9"),
        }
    }

    /// Cell for a keypad digit `'1'` to `'9'`.
    pub fn from_keypad(key: char) -> Option<Self> {
        match key.to_digit(10) {
            Some(digit @ 1..=9) => Self::from_index(digit as usize - 1),
            _ => None,
        }
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl TryFrom<usize> for Position {
    type Error = PositionError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(PositionError::IndexOutOfRange { index })
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = PositionError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        Self::from_row_column(row, column).ok_or(PositionError::CellOutOfRange { row, column })
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> Self {
        position.index()
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses a flat index (`"4"`), a `row,column` pair (`"1,1"`) or a
    /// label (`"center"`, case-insensitive).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(index) = s.parse::<usize>() {
            return Self::try_from(index);
        }

        if let Some((row, column)) = s.split_once(',')
            && let (Ok(row), Ok(column)) = (row.trim().parse(), column.trim().parse())
        {
            return Self::try_from((row, column));
        }

        Self::ALL
            .into_iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| PositionError::Unrecognized {
                input: s.to_string(),
            })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

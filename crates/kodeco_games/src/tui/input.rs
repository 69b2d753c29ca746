//! Keyboard navigation on the grid.

use crossterm::event::KeyCode;
use kodeco_tictactoe::Position;

/// Moves the cursor one cell in the arrow's direction.
///
/// The cursor stops at the edges. Non-arrow keys leave it where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, column)),
        KeyCode::Down => Some((row + 1, column)),
        KeyCode::Left => column.checked_sub(1).map(|column| (row, column)),
        KeyCode::Right => Some((row, column + 1)),
        _ => None,
    };

    target
        .and_then(|(row, column)| Position::from_row_column(row, column))
        .unwrap_or(cursor)
}

/// Cell picked by a keypad digit, if `key` is one of `1`-`9`.
pub fn keypad_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => Position::from_keypad(c),
        _ => None,
    }
}

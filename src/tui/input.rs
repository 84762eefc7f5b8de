//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves the cursor one cell for arrow and `hjkl` keys.
///
/// The cursor stays put at the board edge and for any other key.
pub fn move_cursor(cursor: Position, key: KeyCode, size: usize) -> Position {
    let (col, row) = (cursor.column(), cursor.row());

    let moved = match key {
        KeyCode::Left | KeyCode::Char('h') => Position::new(col.saturating_sub(1), row),
        KeyCode::Right | KeyCode::Char('l') => Position::new(col + 1, row),
        KeyCode::Up | KeyCode::Char('k') => Position::new(col, row.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => Position::new(col, row + 1),
        _ => cursor,
    };

    if moved.is_within(size) { moved } else { cursor }
}

/// Cell a digit key selects, counting 1-9 row by row from the top left.
pub fn digit_position(key: KeyCode, size: usize) -> Option<Position> {
    match key {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index, size)
        }
        _ => None,
    }
}

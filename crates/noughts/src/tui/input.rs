//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_tictactoe::Position;

/// Moves the cursor one cell in the direction of an arrow key.
///
/// The cursor stops at the edges of the grid. Other keys leave it in place.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, column)),
        KeyCode::Down => Some((row + 1, column)),
        KeyCode::Left => column.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, column + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_column(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('w')), Position::Center);
    }
}

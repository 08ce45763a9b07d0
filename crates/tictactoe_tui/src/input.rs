//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the given cell index.
    Play(usize),
    /// Move the cursor one cell.
    MoveCursor(KeyCode),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Start a new round.
    Restart,
    /// Leave the game.
    Quit,
}

/// Maps a key to a command. Digits 1-9 address cells 0-8.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Command::Play(d as usize - 1)),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::MoveCursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the cursor with the arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(command_for_key(KeyCode::Char('1')), Some(Command::Play(0)));
        assert_eq!(command_for_key(KeyCode::Char('9')), Some(Command::Play(8)));
        assert_eq!(command_for_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for_key(KeyCode::Char('r')), Some(Command::Restart));
        assert_eq!(command_for_key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(command_for_key(KeyCode::Enter), Some(Command::PlayCursor));
        assert_eq!(command_for_key(KeyCode::Tab), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Down), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }
}

//! Core domain types for tic-tac-toe.

use crate::error::InvalidIndex;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Player A's mark (moves first).
    X,
    /// Player B's mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square claimed by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, so `index = row * 3 + col`.
/// The only mutation besides [`Board::reset`] is [`Board::set_mark`], which
/// never overwrites an occupied square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Board {
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all nine squares.
    pub fn snapshot(&self) -> [Square; CELL_COUNT] {
        self.squares
    }

    /// Returns a read-only view of the squares.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Places `mark` at `index` if that square is empty.
    ///
    /// Returns `Ok(true)` when the mark was placed and `Ok(false)` when the
    /// square was already occupied; the board is unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIndex`] if `index` is outside 0-8.
    #[instrument(skip(self))]
    pub fn set_mark(&mut self, index: usize, mark: Mark) -> Result<bool, InvalidIndex> {
        let square = self
            .squares
            .get_mut(index)
            .ok_or(InvalidIndex::new(index))?;
        if *square != Square::Empty {
            return Ok(false);
        }
        *square = Square::Occupied(mark);
        Ok(true)
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELL_COUNT];
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Indices of all empty squares, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_mark_on_empty_square() {
        let mut board = Board::new();
        assert_eq!(board.set_mark(4, Mark::X), Ok(true));
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_set_mark_on_occupied_square_leaves_board_unchanged() {
        let mut board = Board::new();
        board.set_mark(4, Mark::X).unwrap();
        let before = board.snapshot();

        assert_eq!(board.set_mark(4, Mark::O), Ok(false));
        assert_eq!(board.set_mark(4, Mark::X), Ok(false));
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_set_mark_out_of_range() {
        let mut board = Board::new();
        let err = board.set_mark(9, Mark::X).unwrap_err();
        assert_eq!(err.index(), 9);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut board = Board::new();
        let mut snapshot = board.snapshot();
        snapshot[0] = Square::Occupied(Mark::O);
        assert!(board.is_empty(0));

        board.set_mark(0, Mark::X).unwrap();
        assert_eq!(snapshot[0], Square::Occupied(Mark::O));
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        board.set_mark(0, Mark::X).unwrap();
        board.set_mark(8, Mark::O).unwrap();
        board.reset();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set_mark(0, Mark::X).unwrap();
        board.set_mark(4, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}

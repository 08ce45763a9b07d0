//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Square};
use tracing::instrument;

/// The eight triples that win the game: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line fully claimed by `mark`.
///
/// Only `mark`'s own squares count; lines held by the other mark are
/// ignored.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    let claimed = Square::Occupied(mark);
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|&i| board.get(i) == Some(claimed)))
}

/// Checks whether `mark` holds three in a row.
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(i, mark) in cells {
            board.set_mark(i, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_winner(&board, Mark::X));
        assert!(!is_winner(&board, Mark::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let board = board_with(&line.map(|i| (i, Mark::O)));
            assert_eq!(winning_line(&board, Mark::O), Some(line));
            assert!(!is_winner(&board, Mark::X));
        }
    }

    #[test]
    fn test_winner_is_mark_specific() {
        // O holds the middle row, X holds nothing complete
        let board = board_with(&[
            (3, Mark::O),
            (4, Mark::O),
            (5, Mark::O),
            (0, Mark::X),
            (1, Mark::X),
        ]);
        assert!(is_winner(&board, Mark::O));
        assert!(!is_winner(&board, Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::O)]);
        assert_eq!(winning_line(&board, Mark::X), None);
    }
}

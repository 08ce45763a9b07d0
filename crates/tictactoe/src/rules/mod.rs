//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a [`Board`](crate::Board). Rules are kept
//! apart from board storage so the engine and the terminal UI share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, is_winner, winning_line};

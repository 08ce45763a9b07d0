//! Two-player tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: nine squares in row-major order; marks are placed, never
//!   overwritten
//! - **Rules**: pure win and full-board checks over a board
//! - **Engine**: turn order, outcome detection and a running score
//! - **Sessions**: a locked registry of engines for hosting several games
//!
//! # Example
//!
//! ```
//! use tictactoe::{Engine, GameStatus, Mark, TurnOutcome};
//!
//! let mut engine = Engine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.play_turn(index)?;
//! }
//! let outcome = engine.play_turn(2)?;
//! assert_eq!(outcome, TurnOutcome::Accepted(GameStatus::Won(Mark::X)));
//! assert_eq!(engine.scores().wins(Mark::X), 1);
//! # Ok::<(), tictactoe::InvalidIndex>(())
//! ```

#![warn(missing_docs)]

mod engine;
mod error;
mod position;
pub mod rules;
mod session;
mod types;

pub use engine::{
    DEFAULT_PLAYER_A, DEFAULT_PLAYER_B, Engine, GameStatus, GameView, Player, Scores, TurnOutcome,
};
pub use error::{InvalidIndex, SessionError};
pub use position::Position;
pub use session::{SessionId, SessionManager};
pub use types::{Board, CELL_COUNT, Mark, Square};

//! Error types for board and session operations.

use derive_more::{Display, Error, From};

/// A cell index outside the board (valid indices are 0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell index {} is out of range (must be 0-8)", index)]
pub struct InvalidIndex {
    index: usize,
}

impl InvalidIndex {
    /// Creates an error for the rejected index.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// The index that was rejected.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Errors returned by [`SessionManager`](crate::SessionManager).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// No session is registered under this id.
    #[display("Session {} not found", _0)]
    SessionNotFound(#[error(not(source))] String),

    /// A session with this id already exists.
    #[display("Session {} already exists", _0)]
    SessionExists(#[error(not(source))] String),

    /// The move referenced a cell outside the board.
    #[display("{}", _0)]
    #[from]
    InvalidIndex(InvalidIndex),

    /// Another thread panicked while holding the session lock.
    #[display("Session lock poisoned")]
    LockPoisoned,
}

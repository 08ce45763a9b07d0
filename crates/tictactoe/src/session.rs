//! Registry of independent game sessions.
//!
//! Each session owns one [`Engine`]. All access goes through a single mutex,
//! so moves against the same engine are applied one at a time even when the
//! manager is shared between threads.

use crate::engine::{Engine, GameView, TurnOutcome};
use crate::error::SessionError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Shared handle to all live sessions. Cloning shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, Engine>>>,
}

impl SessionManager {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, Engine>>, SessionError> {
        self.sessions.lock().map_err(|_| {
            warn!("Session lock poisoned");
            SessionError::LockPoisoned
        })
    }

    fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Engine) -> T,
    ) -> Result<T, SessionError> {
        let mut sessions = self.lock()?;
        let engine = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::SessionNotFound(id.to_string()))?;
        Ok(f(engine))
    }

    /// Registers a new session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionExists`] if `id` is already taken.
    #[instrument(skip(self, player_a, player_b))]
    pub fn create_session(
        &self,
        id: &str,
        player_a: impl Into<String>,
        player_b: impl Into<String>,
    ) -> Result<(), SessionError> {
        let mut sessions = self.lock()?;
        if sessions.contains_key(id) {
            warn!(session_id = id, "Session already exists");
            return Err(SessionError::SessionExists(id.to_string()));
        }
        sessions.insert(id.to_string(), Engine::with_players(player_a, player_b));
        info!(session_id = id, "Session created");
        Ok(())
    }

    /// Plays a move in the given session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionNotFound`] for unknown ids and
    /// [`SessionError::InvalidIndex`] for indices outside 0-8.
    #[instrument(skip(self))]
    pub fn play_turn(&self, id: &str, index: usize) -> Result<TurnOutcome, SessionError> {
        let outcome = self.with_session(id, |engine| engine.play_turn(index))??;
        debug!(session_id = id, ?outcome, "Turn processed");
        Ok(outcome)
    }

    /// Starts a new round in the given session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionNotFound`] for unknown ids.
    #[instrument(skip(self))]
    pub fn reset_game(&self, id: &str) -> Result<(), SessionError> {
        self.with_session(id, Engine::reset_game)
    }

    /// Snapshot of a session for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionNotFound`] for unknown ids.
    pub fn view(&self, id: &str) -> Result<GameView, SessionError> {
        self.with_session(id, |engine| engine.view())
    }

    /// Drops a session. Returns whether it existed.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<bool, SessionError> {
        let removed = self.lock()?.remove(id).is_some();
        debug!(session_id = id, removed, "Session removal");
        Ok(removed)
    }

    /// Ids of all live sessions, sorted.
    pub fn session_ids(&self) -> Result<Vec<SessionId>, SessionError> {
        let mut ids: Vec<_> = self.lock()?.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

//! Turn-based game engine with a running score.
//!
//! An [`Engine`] owns one [`Board`] and two [`Player`]s. It enforces turn
//! order, detects wins and ties, and tallies results across rounds.
//! [`Engine::reset_game`] starts a new round but keeps the scores.

use crate::error::InvalidIndex;
use crate::rules;
use crate::types::{Board, Mark};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default display name for the player holding X.
pub const DEFAULT_PLAYER_A: &str = "Player 1";
/// Default display name for the player holding O.
pub const DEFAULT_PLAYER_B: &str = "Player 2";

/// A participant: display name plus mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Name shown in the UI and in log messages.
    #[new(into)]
    name: String,
    /// Mark this player places.
    mark: Mark,
}

/// Status of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// The given mark completed a line.
    Won(Mark),
    /// The board filled up with no line.
    Tie,
}

impl GameStatus {
    /// True for `Won` and `Tie`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Result of [`Engine::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The mark was placed. Carries the status after the move.
    Accepted(GameStatus),
    /// The cell already held a mark. Nothing changed.
    RejectedOccupied,
    /// The round is over. Nothing changed.
    RejectedGameOver,
}

impl TurnOutcome {
    /// True if the move was applied.
    pub fn is_accepted(self) -> bool {
        matches!(self, TurnOutcome::Accepted(_))
    }
}

/// Running tally across rounds. Counters only ever increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Scores {
    /// Wins credited to `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Rounds that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total finished rounds.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Tie => self.ties += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Everything a presentation layer needs to redraw, in one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Board contents.
    board: Board,
    /// Mark to move (or the mark that made the final move).
    current: Mark,
    /// Round status.
    status: GameStatus,
    /// Running scores.
    scores: Scores,
    /// Name of the player holding X.
    player_a: String,
    /// Name of the player holding O.
    player_b: String,
    /// Completed line, when the round was won.
    winning_line: Option<[usize; 3]>,
}

/// Tic-tac-toe engine for one game session.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    players: [Player; 2],
    current: Mark,
    status: GameStatus,
    scores: Scores,
    history: Vec<usize>,
}

impl Engine {
    /// Creates an engine with the default player names.
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(DEFAULT_PLAYER_A, DEFAULT_PLAYER_B)
    }

    /// Creates an engine; `player_a` plays X and moves first.
    #[instrument(skip_all)]
    pub fn with_players(player_a: impl Into<String>, player_b: impl Into<String>) -> Self {
        let players = [
            Player::new(player_a, Mark::X),
            Player::new(player_b, Mark::O),
        ];
        debug!(player_a = %players[0].name, player_b = %players[1].name, "Creating engine");
        Self {
            board: Board::new(),
            players,
            current: Mark::X,
            status: GameStatus::InProgress,
            scores: Scores::default(),
            history: Vec::new(),
        }
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// A finished round rejects every move, valid index or not. An occupied
    /// cell is rejected without changing anything. On success the win check
    /// for the mover runs before the full-board check, and the turn passes to
    /// the other player only if the round continues.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIndex`] if `index` is outside 0-8 while the round is
    /// in progress.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn play_turn(&mut self, index: usize) -> Result<TurnOutcome, InvalidIndex> {
        if self.status.is_over() {
            debug!(status = ?self.status, "Move ignored, round is over");
            return Ok(TurnOutcome::RejectedGameOver);
        }

        let mover = self.current;
        if !self.board.set_mark(index, mover)? {
            warn!(index, "Spot already taken!");
            return Ok(TurnOutcome::RejectedOccupied);
        }
        self.history.push(index);

        if rules::is_winner(&self.board, mover) {
            self.status = GameStatus::Won(mover);
            info!("{} wins!", self.player(mover).name);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Tie;
            info!("It's a tie!");
        } else {
            self.current = mover.opponent();
            debug!(next = %self.current, "Turn passes");
        }
        self.scores.record(self.status);

        Ok(TurnOutcome::Accepted(self.status))
    }

    /// Starts a new round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.history.clear();
        self.current = Mark::X;
        self.status = GameStatus::InProgress;
        info!(rounds = self.scores.rounds(), "Game reset");
    }

    /// Snapshot of the board.
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    /// Status of the current round.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the round has been won or tied.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Running scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Player to move. After a win this is the winner.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }

    /// Cells played this round, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Line completed by the winner, if the round was won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.status
            .winner()
            .and_then(|mark| rules::winning_line(&self.board, mark))
    }

    /// Bundles board, status, scores and names for a redraw.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board.clone(),
            current: self.current,
            status: self.status,
            scores: self.scores,
            player_a: self.players[0].name.clone(),
            player_b: self.players[1].name.clone(),
            winning_line: self.winning_line(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

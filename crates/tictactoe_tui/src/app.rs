//! Application state and logic.

use crate::input::{self, Command};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe::{CELL_COUNT, Engine, GameStatus, Position, TurnOutcome};
use tracing::{debug, instrument, warn};

/// Main application state.
///
/// Owns the engine and everything the screen shows that the engine does not:
/// the keyboard cursor, the status line, and where each cell was last drawn.
pub struct App {
    engine: Engine,
    cursor: Position,
    status_message: String,
    cell_areas: [Rect; CELL_COUNT],
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh engine.
    pub fn new(engine: Engine) -> Self {
        let status_message = status_line(&engine);
        Self {
            engine,
            cursor: Position::Center,
            status_message,
            cell_areas: [Rect::default(); CELL_COUNT],
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where each cell was drawn so clicks can be resolved.
    pub fn set_cell_areas(&mut self, areas: [Rect; CELL_COUNT]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match input::command_for_key(key) {
            Some(Command::Play(index)) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.play(index);
            }
            Some(Command::MoveCursor(direction)) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Some(Command::PlayCursor) => self.play(self.cursor.to_index()),
            Some(Command::Restart) => self.restart(),
            Some(Command::Quit) => self.should_quit = true,
            None => {}
        }
    }

    /// Handles a mouse event. Left clicks inside a cell play that cell.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match cell_at(&self.cell_areas, event.column, event.row) {
            Some(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.play(index);
            }
            None => debug!(column = event.column, row = event.row, "Click outside board"),
        }
    }

    /// Forwards a move to the engine and updates the status line.
    fn play(&mut self, index: usize) {
        self.status_message = match self.engine.play_turn(index) {
            Ok(TurnOutcome::Accepted(_)) => status_line(&self.engine),
            Ok(TurnOutcome::RejectedOccupied) => "Spot already taken!".to_string(),
            Ok(TurnOutcome::RejectedGameOver) => "Game over. Press r to restart.".to_string(),
            Err(e) => {
                warn!(error = %e, "Move rejected");
                e.to_string()
            }
        };
    }

    /// Starts a new round, keeping the score.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset_game();
        self.cursor = Position::Center;
        self.status_message = status_line(&self.engine);
    }
}

/// Status text for the engine's current state.
pub fn status_line(engine: &Engine) -> String {
    match engine.status() {
        GameStatus::InProgress => {
            let player = engine.current_player();
            format!("{}'s turn ({})", player.name(), player.mark())
        }
        GameStatus::Won(mark) => {
            format!("{} wins! Press r to play again.", engine.player(mark).name())
        }
        GameStatus::Tie => "It's a tie! Press r to play again.".to_string(),
    }
}

/// Finds the cell whose drawn area contains the terminal coordinate.
pub fn cell_at(areas: &[Rect; CELL_COUNT], column: u16, row: u16) -> Option<usize> {
    areas.iter().position(|area| {
        column >= area.left() && column < area.right() && row >= area.top() && row < area.bottom()
    })
}

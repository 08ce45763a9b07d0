//! UI rendering using ratatui.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{CELL_COUNT, Mark};

pub use board::render_board;

/// Draws the main UI and returns where each board cell was drawn.
pub fn draw(f: &mut Frame, app: &App) -> [Rect; CELL_COUNT] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let engine = app.engine();
    let cells = render_board(
        f,
        chunks[1],
        &engine.board(),
        app.cursor(),
        engine.winning_line(),
    );

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let scores = engine.scores();
    let score_text = format!(
        "{} (X): {}   {} (O): {}   Ties: {}",
        engine.player(Mark::X).name(),
        scores.wins(Mark::X),
        engine.player(Mark::O).name(),
        scores.wins(Mark::O),
        scores.ties(),
    );
    let score = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(score, chunks[3]);

    let help = Paragraph::new("Click a cell or press 1-9 | Arrows + Enter | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);

    cells
}

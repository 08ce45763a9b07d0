//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictactoe::{Board, CELL_COUNT, Mark, Position, Square};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the board and returns the area of each cell, by index.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning_line: Option<[usize; 3]>,
) -> [Rect; CELL_COUNT] {
    let cells = cell_areas(area);
    for (index, cell) in cells.iter().enumerate() {
        let highlight = if winning_line.is_some_and(|line| line.contains(&index)) {
            Highlight::Winning
        } else if index == cursor.to_index() {
            Highlight::Cursor
        } else {
            Highlight::None
        };
        render_square(f, *cell, board, index, highlight);
    }

    let rows = board_rows(area);
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
    for row in [rows[0], rows[2], rows[4]] {
        let cols = row_columns(row);
        render_vertical_sep(f, cols[1]);
        render_vertical_sep(f, cols[3]);
    }
    cells
}

/// Computes where each of the nine cells lands inside `area`.
pub fn cell_areas(area: Rect) -> [Rect; CELL_COUNT] {
    let rows = board_rows(area);
    let mut cells = [Rect::default(); CELL_COUNT];
    for (r, row) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = row_columns(row);
        for (c, col) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = col;
        }
    }
    cells
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    None,
    Cursor,
    Winning,
}

fn board_rows(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(center_rect(area, BOARD_WIDTH, BOARD_HEIGHT))
}

fn row_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area)
}

fn render_square(f: &mut Frame, area: Rect, board: &Board, index: usize, highlight: Highlight) {
    let (text, base_style) = match board.get(index) {
        Some(Square::Occupied(Mark::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Mark::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (format!("{}", index + 1), Style::default().fg(Color::DarkGray)),
    };

    let style = match highlight {
        Highlight::Winning => base_style.bg(Color::Green).fg(Color::Black),
        Highlight::Cursor => base_style.bg(Color::White),
        Highlight::None => base_style,
    };

    // Middle line carries the mark; the padding lines share the background
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_areas_are_disjoint_and_ordered() {
        let cells = cell_areas(Rect::new(0, 0, 80, 24));
        for cell in &cells {
            assert_eq!(cell.width, CELL_WIDTH);
            assert_eq!(cell.height, CELL_HEIGHT);
        }
        for i in 0..CELL_COUNT {
            for j in (i + 1)..CELL_COUNT {
                assert!(!cells[i].intersects(cells[j]), "cells {i} and {j} overlap");
            }
        }
        // Row-major: same row shares y, later columns sit further right
        assert_eq!(cells[0].y, cells[2].y);
        assert!(cells[1].x > cells[0].x);
        assert!(cells[3].y > cells[0].y);
    }

    #[test]
    fn test_board_is_centered() {
        let cells = cell_areas(Rect::new(0, 0, 80, 24));
        let left = cells[0].x;
        let right = 80 - (cells[2].x + cells[2].width);
        assert!(left.abs_diff(right) <= 1);
    }
}

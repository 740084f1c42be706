//! Tic-tac-toe board rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use rewind_tictactoe::{Board, Cell, Player, Position, WinningLine};

/// Renders the displayed snapshot, highlighting any winning line.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let board = game.current_board();
    let highlight = game.winning_line();
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());

    let board_area = center_rect(area, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        render_row(f, area, board, row, highlight, cursor);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    row: usize,
    highlight: Option<WinningLine>,
    cursor: Option<Position>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            render_cell(f, area, board, pos, highlight, cursor);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_cell(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    highlight: Option<WinningLine>,
    cursor: Option<Position>,
) {
    let (text, mut style) = match board.cell(pos) {
        Cell::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if highlight.is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Yellow);
    }
    if cursor == Some(pos) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the mark in the three-line cell.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}

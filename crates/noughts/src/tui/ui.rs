//! Stateless UI rendering for the terminal front end.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, NameForm, Screen};
use crate::status_line;
use noughts_tictactoe::{Board, Mark, Position, Square};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::NameEntry(form) => draw_name_entry(frame, form),
        Screen::Playing => draw_game(frame, app),
    }
}

/// Splits the screen into title, board, status and help rows.
fn page_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(3),            // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Area the grid occupies inside a full-screen `area`.
pub fn board_area(area: Rect) -> Rect {
    center_rect(page_layout(area)[1], BOARD_WIDTH, BOARD_HEIGHT)
}

/// Screen rectangle of one cell inside `board`.
pub fn cell_rect(board: Rect, pos: Position) -> Rect {
    Rect::new(
        board.x + pos.column() as u16 * (CELL_WIDTH + 1),
        board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
}

/// Maps a terminal coordinate to the cell drawn there.
///
/// Separators and anything outside the grid map to `None`.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let board = board_area(area);
    if !fits(board) {
        return None;
    }
    let dx = column.checked_sub(board.x)?;
    let dy = row.checked_sub(board.y)?;
    if dx >= BOARD_WIDTH || dy >= BOARD_HEIGHT {
        return None;
    }
    if dx % (CELL_WIDTH + 1) == CELL_WIDTH || dy % (CELL_HEIGHT + 1) == CELL_HEIGHT {
        return None;
    }
    Position::from_row_column(
        (dy / (CELL_HEIGHT + 1)) as usize,
        (dx / (CELL_WIDTH + 1)) as usize,
    )
}

fn fits(board: Rect) -> bool {
    board.width >= BOARD_WIDTH && board.height >= BOARD_HEIGHT
}

fn draw_game(frame: &mut Frame, app: &App) {
    let [title_area, board_chunk, status_area, help_area] = page_layout(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, title_area);

    let board = center_rect(board_chunk, BOARD_WIDTH, BOARD_HEIGHT);
    if fits(board) {
        draw_board(frame, board, app.game().board(), app.cursor());
    } else {
        let warning = Paragraph::new("Terminal too small for the board")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(warning, board_chunk);
    }

    let status_style = if app.game().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let mut status = vec![Span::styled(status_line(app.game()), status_style)];
    if let Some(message) = app.message() {
        status.push(Span::raw("  "));
        status.push(Span::styled(message, Style::default().fg(Color::Red)));
    }
    let status_text = Paragraph::new(Line::from(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, status_area);

    let help = Paragraph::new("1-9 / click / arrows+Enter: Move | r: Reset | n: Names | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, help_area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let separator = Style::default().fg(Color::DarkGray);

    for row in 1..3u16 {
        let y = area.y + row * (CELL_HEIGHT + 1) - 1;
        let line = Paragraph::new("─".repeat(BOARD_WIDTH as usize)).style(separator);
        frame.render_widget(line, Rect::new(area.x, y, BOARD_WIDTH, 1));
    }
    for column in 1..3u16 {
        let x = area.x + column * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = area.y + row * (CELL_HEIGHT + 1);
            let bar = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize]).style(separator);
            frame.render_widget(bar, Rect::new(x, y, 1, CELL_HEIGHT));
        }
    }

    for pos in Position::ALL {
        draw_cell(frame, cell_rect(area, pos), board.get(pos), pos, pos == cursor);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, pos: Position, highlighted: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => (pos.number().to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(if highlighted { Style::default().bg(Color::White) } else { Style::default() });

    frame.render_widget(paragraph, area);
}

fn draw_name_entry(frame: &mut Frame, form: &NameForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Who is playing?")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    for (mark, area) in [(Mark::X, chunks[1]), (Mark::O, chunks[2])] {
        let focused = form.focus() == mark;
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(form.field(mark))
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!("Player {} name", mark)),
            );
        frame.render_widget(input, area);

        if focused {
            frame.set_cursor_position((input_cursor_x(area, form.field(mark)), area.y + 1));
        }
    }

    let error = Paragraph::new(form.error().unwrap_or(""))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(error, chunks[3]);

    let help_text = if form.is_renaming() {
        "Type name | Tab: Switch | Enter: Confirm | Esc: Keep current names"
    } else {
        "Type name | Tab: Switch | Enter: Confirm | Esc: Default names"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[5]);
}

/// Column of the text cursor after `text` in a bordered input box.
///
/// Stays inside the box however long the text gets.
fn input_cursor_x(area: Rect, text: &str) -> u16 {
    let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

//! TUI rendering with ratatui
//!
//! The nine boards sit in a 3×3 grid next to a messages and score panel.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Board, BoardStatus, GuessRecord, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Boards and side panel
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_board_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 NINE-BOARD WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_grid(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let boards = app.session.boards().boards();
    for (row_idx, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row_area);

        for (col_idx, cell) in cells.iter().enumerate() {
            if let Some(board) = boards.get(row_idx * 3 + col_idx) {
                render_board(f, app, board, *cell);
            }
        }
    }
}

fn tile_style(tile: Tile) -> Style {
    let bg = match tile {
        Tile::Correct => Color::Green,
        Tile::Present => Color::Yellow,
        Tile::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn guess_line(record: &GuessRecord) -> Line<'static> {
    let spans: Vec<Span> = record
        .guess
        .chars()
        .iter()
        .zip(record.feedback.tiles())
        .flat_map(|(&letter, &tile)| {
            [
                Span::styled(
                    format!(" {} ", char::from(letter.to_ascii_uppercase())),
                    tile_style(tile),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, board: &Board, area: Rect) {
    let (color, status) = match board.status() {
        BoardStatus::Active => (Color::White, String::new()),
        BoardStatus::Won => (Color::Green, " ✓".to_string()),
        BoardStatus::Lost => (
            Color::Red,
            format!(" ✗ {}", board.target().text().to_uppercase()),
        ),
    };

    let mut lines: Vec<Line> = board.history().iter().map(guess_line).collect();
    let empty_row = Line::from(Span::styled(
        " ·   ·   ·   ·   · ",
        Style::default().fg(Color::DarkGray),
    ));
    lines.resize(board.max_guesses(), empty_row);

    // Reveal remaining targets once the session is over
    if app.input_mode == InputMode::Finished && board.status() == BoardStatus::Active {
        lines.push(Line::from(Span::styled(
            board.target().text().to_uppercase(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Board {}{status} ", board.id() + 1))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Round gauge
            Constraint::Length(6), // Session stats
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_round_progress(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_round_progress(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.boards().rounds_played();
    let max = app.config.max_guesses;
    let progress_pct = (used * 100 / max.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{used}/{max}"));

    f.render_widget(gauge, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let set = app.session.boards();
    let won = set
        .boards()
        .iter()
        .filter(|b| b.status() == BoardStatus::Won)
        .count();

    let content = vec![
        Line::from(vec![
            Span::raw("Solved:   "),
            Span::styled(
                format!("{won}/{}", set.boards().len()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Active:   {}", set.active_boards().count())),
        Line::from(format!("Sessions: {}", app.stats.sessions)),
        Line::from(format!("Best:     {}", app.stats.best_score)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Enter Guess (5 letters) | Enter to submit | Esc to give up ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::Finished => (
            " Session over | 'n' for new session or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let last = app
        .stats
        .last_score
        .map_or_else(String::new, |score| format!(" | Last score: {score}"));
    let text = format!(
        "Round {}/{}{last} | Ctrl-C: Quit",
        (app.session.boards().rounds_played() + 1).min(app.config.max_guesses),
        app.config.max_guesses
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

//! TUI rendering with ratatui
//!
//! The game board, on-screen keyboard hints, and mood gauge.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterStatus, MAX_GUESSES, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - board on the left, info on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD GRID")
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

fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let mut spans: Vec<Span> = Vec::with_capacity(WORD_LENGTH * 2);

        if let Some(record) = history.get(row) {
            // Scored row: colored tiles
            for (i, status) in record.feedback.iter().enumerate() {
                let letter = record.guess.text()[i..=i].to_string();
                spans.push(Span::styled(format!(" {letter} "), tile_style(status)));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && app.input_mode == InputMode::Typing {
            // Active row: typed letters, blanks for the rest
            for i in 0..WORD_LENGTH {
                let cell = app
                    .entry
                    .get(i..=i)
                    .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                spans.push(Span::styled(
                    cell,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            // Future row
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mood gauge
            Constraint::Length(5), // Keyboard
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_mood(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_mood(f: &mut Frame, app: &App, area: Rect) {
    let ratio = app.session.mood_ratio();
    let percent = (ratio * 100.0).min(100.0) as u16;

    // White -> yellow -> green as the session warms up
    let color = if ratio < 0.34 {
        Color::White
    } else if ratio < 0.67 {
        Color::Yellow
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Mood ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{percent}%"));

    f.render_widget(gauge, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(KEYBOARD_ROWS.len());

    for row in KEYBOARD_ROWS {
        let mut spans: Vec<Span> = Vec::with_capacity(row.len() * 2);
        for letter in row.bytes() {
            let style = app.hint_for(letter).map_or_else(
                || Style::default().fg(Color::White),
                tile_style,
            );
            spans.push(Span::styled(format!("{} ", letter as char), style));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
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
        InputMode::GameOver => (
            " Game over | 'n' new game, 1/2/3 difficulty, 'q' quit ",
            app.share_text(),
            Color::Green,
        ),
        InputMode::Typing => (
            " Type a 5-letter word and press Enter ",
            app.entry.clone(),
            Color::Yellow,
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
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let difficulty = Paragraph::new(format!("Difficulty: {}", app.difficulty))
        .alignment(Alignment::Center);
    f.render_widget(difficulty, chunks[0]);

    let win_pct = if app.stats.played > 0 {
        app.stats.wins as f64 / app.stats.played as f64 * 100.0
    } else {
        0.0
    };
    let stats = Paragraph::new(format!(
        "Played: {} | Wins: {win_pct:.0}%",
        app.stats.played
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak = Paragraph::new(format!(
        "Streak: {} (max {})",
        app.stats.streak, app.stats.max_streak
    ))
    .alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl+N: New | 1/2/3: Difficulty")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

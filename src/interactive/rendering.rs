//! TUI rendering with ratatui
//!
//! Visualizations for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::RoundState;
use crate::output::formatters::{gallows, masked_word};
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
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows panel
            Constraint::Percentage(60), // Play panel
        ])
        .split(chunks[1]);

    render_gallows_panel(f, app, main_chunks[0]);
    render_play_panel(f, app, main_chunks[1]);

    // Status bar
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_gallows_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Portrait
            Constraint::Length(3), // Remaining-guesses gauge
        ])
        .split(area);

    render_portrait(f, app, chunks[0]);
    render_guess_gauge(f, app, chunks[1]);
}

fn render_portrait(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();

    let color = match round.state() {
        RoundState::Lost => Color::Red,
        RoundState::Won => Color::Green,
        RoundState::Active => Color::White,
    };

    let portrait = Paragraph::new(gallows(round.incorrect_count()))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(portrait, area);
}

fn render_guess_gauge(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let remaining = round.remaining_guesses();

    let color = match remaining {
        4..=6 => Color::Green,
        2..=3 => Color::Yellow,
        _ => Color::Red,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(remaining) / f64::from(crate::core::MAX_INCORRECT))
        .label(format!("{remaining} left"));

    f.render_widget(gauge, area);
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word + hint
            Constraint::Length(5), // Letter board
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_letter_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();

    let word_line = if round.state() == RoundState::Lost {
        // Reveal the word on a loss
        let revealed: String = round
            .entry()
            .word()
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        Line::from(Span::styled(
            revealed,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            masked_word(round),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let content = vec![
        word_line,
        Line::from(""),
        Line::from(vec![
            Span::styled("Hint: ", Style::default().fg(Color::DarkGray)),
            Span::styled(round.entry().hint(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_letter_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();

    let letter_row = |letters: std::ops::RangeInclusive<char>| {
        let spans: Vec<Span> = letters
            .flat_map(|letter| {
                let style = if !round.is_guessed(letter) {
                    Style::default().fg(Color::White)
                } else if round.entry().contains(letter) {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::CROSSED_OUT)
                };
                [Span::styled(letter.to_string(), style), Span::raw(" ")]
            })
            .collect();
        Line::from(spans)
    };

    let content = vec![letter_row('A'..='M'), letter_row('N'..='Z')];

    let board = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

    let score_text = format!("Score: {}", app.session.score());
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        if app.stats.rounds_played > 0 {
            app.stats.rounds_won as f64 / app.stats.rounds_played as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let guesses_text = format!(
        "Misses: {}/{}",
        app.session.round().incorrect_count(),
        crate::core::MAX_INCORRECT
    );
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "A-Z: Guess | Esc: Quit",
        InputMode::RoundOver => "n: Next Word | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

//! TUI application state and logic

use crate::core::{GuessOutcome, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    /// Won rounds indexed by how many misses they took (0-5)
    pub miss_distribution: [usize; 6],
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            input_mode: InputMode::Guessing,
            messages: vec![
                Message {
                    text: "Welcome! Type letters to guess the word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Six misses and the round is lost. Spaces are free.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Apply one letter guess and react to the outcome
    pub fn guess(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();

        match self.session.guess(letter) {
            GuessOutcome::Correct => {
                self.add_message(&format!("{letter} is in the word!"), MessageStyle::Success);
            }
            GuessOutcome::Incorrect => {
                let remaining = self.session.round().remaining_guesses();
                self.add_message(
                    &format!("No {letter} — {remaining} guesses left"),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::Ignored => {
                if letter.is_ascii_uppercase() {
                    self.add_message(&format!("Already tried {letter}!"), MessageStyle::Info);
                }
            }
            GuessOutcome::Won => {
                let misses = usize::from(self.session.round().incorrect_count());
                self.stats.rounds_played += 1;
                self.stats.rounds_won += 1;
                if let Some(slot) = self.stats.miss_distribution.get_mut(misses) {
                    *slot += 1;
                }

                self.input_mode = InputMode::RoundOver;

                let celebration = match misses {
                    0 => "🏆 FLAWLESS! Not a single miss! 🌟",
                    1 => "🔥 MAGNIFICENT! Only one miss! 🔥",
                    2 => "✨ SPLENDID! Two misses! ✨",
                    3 => "👏 GREAT JOB! Three misses! 👏",
                    4 => "🎉 NICE WORK! Four misses! 🎉",
                    _ => "😅 PHEW! That was close! 😅",
                };

                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for next word or 'q' to quit.", MessageStyle::Info);
            }
            GuessOutcome::Lost => {
                self.stats.rounds_played += 1;
                self.input_mode = InputMode::RoundOver;

                let word = self.session.round().entry().word().to_string();
                self.add_message(
                    &format!("💀 Out of guesses! The word was {word}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for next word or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Advance to the next word
    pub fn next_round(&mut self) {
        self.session.start_round();
        self.input_mode = InputMode::Guessing;
        self.messages.clear();
        self.add_message("New word! Type letters to guess.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Guessing => {
                    // Every letter is a guess, so quitting is Esc/Ctrl-C only
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                            app.guess(c);
                        }
                        _ => {}
                    }
                }
                InputMode::RoundOver => {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') | KeyCode::Enter => {
                            app.next_round();
                        }
                        _ => {
                            // Between rounds, ignore other keys
                        }
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! Hangman
//!
//! A terminal Hangman word-guessing game: guess the word one letter at a
//! time, six misses and the round is lost. Rounds chain into a session with a
//! cumulative score; the word queue reshuffles when exhausted.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_tui::core::{GuessOutcome, Session, WordEntry};
//!
//! let entries = vec![WordEntry::new("CAT", "Meows").unwrap()];
//! let mut session = Session::new(entries).unwrap();
//!
//! assert_eq!(session.guess('c'), GuessOutcome::Correct);
//! assert_eq!(session.guess('a'), GuessOutcome::Correct);
//! assert_eq!(session.guess('t'), GuessOutcome::Won);
//! assert_eq!(session.score(), 1);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

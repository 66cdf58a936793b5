//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::print_wordlist_report;
pub use formatters::{create_progress_bar, gallows, guess_bar, guessed_letters, masked_word};

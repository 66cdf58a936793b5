//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! constants. A list file holds one `word|hint` pair per line; blank and
//! malformed lines are skipped.

use crate::core::WordEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a single `word|hint` line into an entry
///
/// Returns `None` for blank lines, lines without a `|` separator, and lines
/// whose word or hint fails validation.
#[must_use]
pub fn parse_line(line: &str) -> Option<WordEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (word, hint) = trimmed.split_once('|')?;
    WordEntry::new(word, hint).ok()
}

/// Load entries from a `word|hint` file
///
/// Returns a vector of valid entries, skipping any invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_tui::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;

    let entries = content.lines().filter_map(parse_line).collect();

    Ok(entries)
}

/// Convert embedded (word, hint) pairs to an entry vector
///
/// # Examples
/// ```
/// use hangman_tui::wordlists::loader::entries_from_pairs;
/// use hangman_tui::wordlists::WORDS;
///
/// let entries = entries_from_pairs(WORDS);
/// assert_eq!(entries.len(), WORDS.len());
/// ```
#[must_use]
pub fn entries_from_pairs(pairs: &[(&str, &str)]) -> Vec<WordEntry> {
    pairs
        .iter()
        .filter_map(|&(word, hint)| WordEntry::new(word, hint).ok())
        .collect()
}

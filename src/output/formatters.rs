//! Formatting utilities for terminal output

use crate::core::{MAX_INCORRECT, Round};

/// Gallows portrait, one stage per incorrect guess
const GALLOWS: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Get the gallows portrait for a number of incorrect guesses
///
/// Saturates at the final stage.
#[must_use]
pub fn gallows(incorrect: u8) -> &'static str {
    GALLOWS[usize::from(incorrect).min(GALLOWS.len() - 1)]
}

/// Format the word with unguessed letters masked
///
/// Guessed letters show as themselves, unguessed letters as `•`, and spaces
/// as real gaps. Characters are space-separated for terminal legibility.
#[must_use]
pub fn masked_word(round: &Round) -> String {
    round
        .entry()
        .word()
        .chars()
        .map(|ch| {
            if ch == ' ' {
                ' '
            } else if round.is_revealed(ch) {
                ch
            } else {
                '•'
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format remaining guesses as a bar
#[must_use]
pub fn guess_bar(remaining: u8, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(MAX_INCORRECT), width)
}

/// The letters guessed so far, in alphabetical order
#[must_use]
pub fn guessed_letters(round: &Round) -> String {
    ('A'..='Z')
        .filter(|&letter| round.is_guessed(letter))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    fn round(word: &str) -> Round {
        Round::new(WordEntry::new(word, "test hint").unwrap())
    }

    #[test]
    fn masked_word_hides_unguessed() {
        let r = round("CAT");
        assert_eq!(masked_word(&r), "• • •");
    }

    #[test]
    fn masked_word_reveals_guessed() {
        let mut r = round("CAT");
        r.guess('A');
        assert_eq!(masked_word(&r), "• A •");
    }

    #[test]
    fn masked_word_shows_spaces_as_gaps() {
        let mut r = round("SEA LION");
        r.guess('S');
        r.guess('I');
        assert_eq!(masked_word(&r), "S • •   • I • •");
    }

    #[test]
    fn masked_word_fully_revealed() {
        let mut r = round("CAT");
        for letter in ['C', 'A', 'T'] {
            r.guess(letter);
        }
        assert_eq!(masked_word(&r), "C A T");
    }

    #[test]
    fn gallows_has_a_stage_per_miss() {
        // All stages distinct, figure complete at the limit
        let stages: Vec<&str> = (0..=MAX_INCORRECT).map(gallows).collect();
        assert_eq!(stages.len(), 7);
        for pair in stages.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn gallows_saturates_past_limit() {
        assert_eq!(gallows(MAX_INCORRECT), gallows(200));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn guess_bar_tracks_remaining() {
        assert_eq!(guess_bar(6, 12), "████████████");
        assert_eq!(guess_bar(3, 12), "██████░░░░░░");
        assert_eq!(guess_bar(0, 12), "░░░░░░░░░░░░");
    }

    #[test]
    fn guessed_letters_sorted() {
        let mut r = round("CAT");
        r.guess('T');
        r.guess('Z');
        r.guess('C');
        assert_eq!(guessed_letters(&r), "C T Z");
    }

    #[test]
    fn guessed_letters_empty_round() {
        let r = round("CAT");
        assert_eq!(guessed_letters(&r), "");
    }
}

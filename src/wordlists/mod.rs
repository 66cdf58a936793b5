//! Word lists for the game
//!
//! Provides the embedded default list compiled into the binary plus a loader
//! for custom `word|hint` files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_list_is_not_empty() {
        assert!(!WORDS.is_empty());
    }

    #[test]
    fn embedded_words_are_valid() {
        // Every bundled word is uppercase letters and spaces, with a hint
        for &(word, hint) in WORDS {
            assert!(!word.is_empty(), "Entry with empty word");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase() || c == ' '),
                "Word '{word}' contains invalid characters"
            );
            assert!(!hint.trim().is_empty(), "Word '{word}' has an empty hint");
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().map(|&(word, _)| word).collect();
        assert_eq!(unique.len(), WORDS.len(), "Duplicate words in embedded list");
    }

    #[test]
    fn embedded_list_all_loadable() {
        // Validation must accept every bundled entry
        let entries = loader::entries_from_pairs(WORDS);
        assert_eq!(entries.len(), WORDS.len());
    }
}

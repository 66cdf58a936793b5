//! Word list inspection command
//!
//! Audits a `word|hint` list file (or the embedded list) and reports how many
//! entries are playable, with per-line diagnostics for the rest.

use crate::core::WordEntry;
use crate::wordlists::loader::parse_line;
use std::fs;
use std::path::Path;

/// A line that failed to parse into a playable entry
pub struct InvalidLine {
    pub line_number: usize,
    pub content: String,
    pub reason: String,
}

/// Result of inspecting a word list
pub struct WordlistReport {
    pub source: String,
    pub total: usize,
    pub valid: usize,
    pub invalid: Vec<InvalidLine>,
}

/// Inspect a word list file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<WordlistReport, String> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {e}", path.display()))?;

    let mut total = 0;
    let mut valid = 0;
    let mut invalid = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        total += 1;

        if parse_line(trimmed).is_some() {
            valid += 1;
        } else {
            invalid.push(InvalidLine {
                line_number: i + 1,
                content: trimmed.to_string(),
                reason: diagnose(trimmed),
            });
        }
    }

    Ok(WordlistReport {
        source: path.display().to_string(),
        total,
        valid,
        invalid,
    })
}

/// Inspect the embedded word list
#[must_use]
pub fn inspect_embedded(pairs: &[(&str, &str)]) -> WordlistReport {
    let mut valid = 0;
    let mut invalid = Vec::new();

    for (i, &(word, hint)) in pairs.iter().enumerate() {
        match WordEntry::new(word, hint) {
            Ok(_) => valid += 1,
            Err(e) => invalid.push(InvalidLine {
                line_number: i + 1,
                content: format!("{word}|{hint}"),
                reason: e.to_string(),
            }),
        }
    }

    WordlistReport {
        source: "embedded".to_string(),
        total: pairs.len(),
        valid,
        invalid,
    }
}

/// Explain why a non-blank line failed to parse
fn diagnose(line: &str) -> String {
    match line.split_once('|') {
        None => "Missing '|' separator between word and hint".to_string(),
        Some((word, hint)) => match WordEntry::new(word, hint) {
            Err(e) => e.to_string(),
            // parse_line rejected it, so validation must fail too
            Ok(_) => "Unparseable line".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_embedded_all_valid() {
        let report = inspect_embedded(&[("CAT", "Meows"), ("SEA LION", "Barks")]);
        assert_eq!(report.total, 2);
        assert_eq!(report.valid, 2);
        assert!(report.invalid.is_empty());
    }

    #[test]
    fn inspect_embedded_flags_bad_entries() {
        let report = inspect_embedded(&[("CAT", "Meows"), ("C4T", "Typo"), ("DOG", "")]);
        assert_eq!(report.total, 3);
        assert_eq!(report.valid, 1);
        assert_eq!(report.invalid.len(), 2);
        assert_eq!(report.invalid[0].line_number, 2);
        assert_eq!(report.invalid[1].line_number, 3);
    }

    #[test]
    fn diagnose_missing_separator() {
        let reason = diagnose("no separator here");
        assert!(reason.contains('|'));
    }

    #[test]
    fn diagnose_bad_word() {
        let reason = diagnose("c4t|Typo");
        assert!(reason.contains("letters"));
    }

    #[test]
    fn inspect_file_reports_line_numbers() {
        use std::io::Write;

        let mut path = std::env::temp_dir();
        path.push("hangman_words_report_test.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "CAT|Meows").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "bad line").unwrap();
        writeln!(file, "DOG|Barks").unwrap();
        drop(file);

        let report = inspect_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(report.total, 3); // blank line not counted
        assert_eq!(report.valid, 2);
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].line_number, 3);
    }

    #[test]
    fn inspect_file_missing_path() {
        let result = inspect_file("/nonexistent/words.txt");
        assert!(result.is_err());
    }
}

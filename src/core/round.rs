//! A single round of the game
//!
//! `Round` is the guess state machine: it owns the word being played, the set
//! of guessed letters, and the miss counter, and applies one transition per
//! guess. It does no I/O and knows nothing about rendering; presentation
//! layers read its accessors after each command.

use super::WordEntry;
use rustc_hash::FxHashSet;

/// Number of incorrect guesses that ends a round as a loss
pub const MAX_INCORRECT: u8 = 6;

/// Lifecycle of a round
///
/// `Won` and `Lost` are terminal: no guess leaves them, only starting a new
/// round does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Active,
    Won,
    Lost,
}

/// What a single guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word, round continues
    Correct,
    /// Letter is not in the word, round continues
    Incorrect,
    /// Letter completed the word
    Won,
    /// Miss count reached the limit
    Lost,
    /// No-op: repeat guess, round already over, or not a letter
    Ignored,
}

/// One play-through of a single word from selection to win/loss
#[derive(Debug, Clone)]
pub struct Round {
    entry: WordEntry,
    guessed: FxHashSet<char>,
    incorrect: u8,
    state: RoundState,
}

impl Round {
    /// Start a fresh round for the given entry
    #[must_use]
    pub fn new(entry: WordEntry) -> Self {
        Self {
            entry,
            guessed: FxHashSet::default(),
            incorrect: 0,
            state: RoundState::Active,
        }
    }

    /// Apply one guess
    ///
    /// Input is uppercase-normalized. Non-letters, repeats, and guesses after
    /// the round is over are silent no-ops reported as `Ignored`. A miss
    /// increments the counter; the sixth miss loses the round. A hit that
    /// covers the last outstanding letter wins it.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_uppercase();

        if self.state != RoundState::Active
            || !letter.is_ascii_uppercase()
            || self.guessed.contains(&letter)
        {
            return GuessOutcome::Ignored;
        }

        self.guessed.insert(letter);

        if self.entry.contains(letter) {
            if self.is_complete() {
                self.state = RoundState::Won;
                GuessOutcome::Won
            } else {
                GuessOutcome::Correct
            }
        } else {
            self.incorrect += 1;
            if self.incorrect >= MAX_INCORRECT {
                self.state = RoundState::Lost;
                GuessOutcome::Lost
            } else {
                GuessOutcome::Incorrect
            }
        }
    }

    /// Every letter of the word has been guessed (spaces never count)
    fn is_complete(&self) -> bool {
        self.entry.letters().iter().all(|l| self.guessed.contains(l))
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// The round has ended, in either direction
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != RoundState::Active
    }

    /// The entry being played
    #[inline]
    #[must_use]
    pub const fn entry(&self) -> &WordEntry {
        &self.entry
    }

    /// Number of incorrect guesses so far
    #[inline]
    #[must_use]
    pub const fn incorrect_count(&self) -> u8 {
        self.incorrect
    }

    /// Incorrect guesses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> u8 {
        MAX_INCORRECT - self.incorrect
    }

    /// The letter has been guessed this round (case-insensitive)
    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    /// The character should be shown to the player
    ///
    /// Spaces are always revealed; letters once guessed.
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, ch: char) -> bool {
        ch == ' ' || self.is_guessed(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> Round {
        Round::new(WordEntry::new(word, "test hint").unwrap())
    }

    #[test]
    fn fresh_round_is_active() {
        let r = round("CAT");
        assert_eq!(r.state(), RoundState::Active);
        assert!(!r.is_over());
        assert_eq!(r.incorrect_count(), 0);
        assert_eq!(r.remaining_guesses(), MAX_INCORRECT);
    }

    #[test]
    fn correct_guess_reveals_letter() {
        let mut r = round("CAT");
        assert_eq!(r.guess('C'), GuessOutcome::Correct);
        assert!(r.is_guessed('C'));
        assert!(r.is_revealed('C'));
        assert!(!r.is_revealed('A'));
        assert_eq!(r.incorrect_count(), 0);
    }

    #[test]
    fn incorrect_guess_increments_counter() {
        let mut r = round("CAT");
        assert_eq!(r.guess('Z'), GuessOutcome::Incorrect);
        assert_eq!(r.incorrect_count(), 1);
        assert_eq!(r.remaining_guesses(), MAX_INCORRECT - 1);
        assert_eq!(r.state(), RoundState::Active);
    }

    #[test]
    fn repeated_miss_counts_at_most_once() {
        let mut r = round("CAT");
        assert_eq!(r.guess('Z'), GuessOutcome::Incorrect);
        assert_eq!(r.guess('Z'), GuessOutcome::Ignored);
        assert_eq!(r.guess('z'), GuessOutcome::Ignored);
        assert_eq!(r.incorrect_count(), 1);
    }

    #[test]
    fn repeated_hit_is_ignored() {
        let mut r = round("CAT");
        assert_eq!(r.guess('C'), GuessOutcome::Correct);
        assert_eq!(r.guess('C'), GuessOutcome::Ignored);
        assert_eq!(r.guess('c'), GuessOutcome::Ignored);
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut r = round("CAT");
        assert_eq!(r.guess('c'), GuessOutcome::Correct);
        assert!(r.is_guessed('C'));
        assert!(r.is_guessed('c'));
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut r = round("CAT");
        assert_eq!(r.guess('3'), GuessOutcome::Ignored);
        assert_eq!(r.guess(' '), GuessOutcome::Ignored);
        assert_eq!(r.guess('!'), GuessOutcome::Ignored);
        assert_eq!(r.guess('é'), GuessOutcome::Ignored);
        assert_eq!(r.incorrect_count(), 0);
    }

    #[test]
    fn cat_in_order_wins_with_no_misses() {
        let mut r = round("CAT");
        assert_eq!(r.guess('C'), GuessOutcome::Correct);
        assert_eq!(r.guess('A'), GuessOutcome::Correct);
        assert_eq!(r.guess('T'), GuessOutcome::Won);
        assert_eq!(r.state(), RoundState::Won);
        assert_eq!(r.incorrect_count(), 0);
    }

    #[test]
    fn six_misses_lose_the_round() {
        let mut r = round("DOG");
        for letter in ['X', 'Y', 'Z', 'Q', 'W'] {
            assert_eq!(r.guess(letter), GuessOutcome::Incorrect);
        }
        assert_eq!(r.guess('E'), GuessOutcome::Lost);
        assert_eq!(r.state(), RoundState::Lost);
        assert_eq!(r.incorrect_count(), MAX_INCORRECT);
        assert_eq!(r.remaining_guesses(), 0);
    }

    #[test]
    fn five_misses_keep_the_round_active() {
        let mut r = round("DOG");
        for letter in ['X', 'Y', 'Z', 'Q', 'W'] {
            r.guess(letter);
        }
        assert_eq!(r.state(), RoundState::Active);
        assert_eq!(r.guess('D'), GuessOutcome::Correct);
    }

    #[test]
    fn space_is_pre_revealed_and_never_required() {
        let mut r = round("SEA LION");
        assert!(r.is_revealed(' '));
        for letter in ['S', 'E', 'A', 'L', 'I', 'O'] {
            assert_eq!(r.guess(letter), GuessOutcome::Correct);
        }
        assert_eq!(r.guess('N'), GuessOutcome::Won);
        assert_eq!(r.state(), RoundState::Won);
    }

    #[test]
    fn duplicate_letters_need_one_guess() {
        let mut r = round("BANANA");
        assert_eq!(r.guess('B'), GuessOutcome::Correct);
        assert_eq!(r.guess('A'), GuessOutcome::Correct);
        assert_eq!(r.guess('N'), GuessOutcome::Won);
    }

    #[test]
    fn won_round_rejects_further_guesses() {
        let mut r = round("CAT");
        r.guess('C');
        r.guess('A');
        r.guess('T');
        assert_eq!(r.guess('Z'), GuessOutcome::Ignored);
        assert_eq!(r.incorrect_count(), 0);
        assert_eq!(r.state(), RoundState::Won);
    }

    #[test]
    fn lost_round_rejects_further_guesses() {
        let mut r = round("CAT");
        for letter in ['X', 'Y', 'Z', 'Q', 'W', 'E'] {
            r.guess(letter);
        }
        assert_eq!(r.state(), RoundState::Lost);
        assert_eq!(r.guess('C'), GuessOutcome::Ignored);
        assert!(!r.is_guessed('C'));
        assert_eq!(r.incorrect_count(), MAX_INCORRECT);
    }

    #[test]
    fn incorrect_count_never_exceeds_limit() {
        let mut r = round("CAT");
        for letter in ('A'..='Z').rev() {
            r.guess(letter);
        }
        assert!(r.incorrect_count() <= MAX_INCORRECT);
        assert_eq!(r.state(), RoundState::Lost);
    }

    #[test]
    fn winning_guess_reported_once() {
        let mut r = round("A");
        assert_eq!(r.guess('A'), GuessOutcome::Won);
        assert_eq!(r.guess('A'), GuessOutcome::Ignored);
    }
}

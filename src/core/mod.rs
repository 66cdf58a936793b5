//! Core domain types for the game
//!
//! This module contains the game state machine with no I/O and no rendering:
//! word entries, the per-round guess transition, and the cross-round session.
//! All types here are pure, deterministic (up to queue shuffling), and
//! testable without any presentation surface.

mod entry;
mod round;
mod session;

pub use entry::{EntryError, WordEntry};
pub use round::{GuessOutcome, MAX_INCORRECT, Round, RoundState};
pub use session::{Session, SessionError};

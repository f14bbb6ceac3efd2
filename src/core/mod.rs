//! Core domain types for the guessing game
//!
//! Words, letter feedback and the scoring rule. Everything here is pure and
//! free of game state.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterState, score, score_str};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LEN: usize = 5;

/// Guesses allowed per round
pub const MAX_GUESSES: usize = 6;

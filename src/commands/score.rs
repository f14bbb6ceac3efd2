//! One-off scoring of a guess against a target

use crate::core::{Feedback, WordError, score_str};

/// Score `guess` against `target`, validating both
///
/// # Errors
///
/// Returns a `WordError` if either input is not a five-letter word.
pub fn score_words(guess: &str, target: &str) -> Result<Feedback, WordError> {
    score_str(guess.trim(), target.trim())
}

//! Guess scoring and per-letter feedback
//!
//! Feedback for a guess is five [`LetterState`]s, one per position:
//! - Correct: letter is in the target at this position
//! - Present: letter is in the target at a different position
//! - Absent: letter is not in the target (or its copies are used up)
//!
//! `Unset` only ever appears on grid cells that have not been scored yet.

use super::{WORD_LEN, Word, WordError};
use std::fmt;
use std::ops::Index;

/// Feedback classification for one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum LetterState {
    #[default]
    Unset,
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji square for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unset => '⬜',
        }
    }
}

/// Scored feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LEN]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LEN]);

    /// The per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LEN] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Render as a string like "⬛🟨🟨🟩⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = LetterState;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Feedback {
    type Item = LetterState;
    type IntoIter = std::array::IntoIter<LetterState, WORD_LEN>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score `guess` against `target`
///
/// Handles duplicate letters the way the game does: a repeated guess letter
/// is credited at most as many times as it occurs in the target.
///
/// # Algorithm
/// 1. Count the letters of the target
/// 2. First pass: mark exact position matches Correct and spend their count
/// 3. Second pass: mark each remaining letter Present while its count lasts,
///    otherwise Absent
///
/// # Examples
/// ```
/// use word_logic::core::{LetterState::*, Word, score};
///
/// let guess = Word::new("scoop").unwrap();
/// let target = Word::new("color").unwrap();
///
/// assert_eq!(score(&guess, &target).states(), &[Absent, Present, Present, Correct, Absent]);
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Feedback {
    let mut result = [LetterState::Absent; WORD_LEN];
    let mut remaining = target.letter_counts();
    let guess = guess.letters();
    let target = target.letters();

    // Allow: Index needed to compare guess[i] with target[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess[i] == target[i] {
            result[i] = LetterState::Correct;
            if let Some(count) = remaining.get_mut(&guess[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, letter) in guess.iter().enumerate() {
        if result[i] == LetterState::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(letter)
            && *count > 0
        {
            result[i] = LetterState::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}

/// Score two unvalidated strings
///
/// # Errors
/// Returns the `WordError` of the first input that is not a valid word;
/// nothing is scored in that case.
pub fn score_str(guess: &str, target: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(score(&guess, &target))
}

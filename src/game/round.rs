//! One attempt at guessing a single target word
//!
//! Every mutating operation pushes a [`RoundSnapshot`] before changing
//! anything, so [`Round::undo`] can restore the exact prior state. Operations
//! whose preconditions do not hold leave the round untouched and return
//! `false`.

use super::grid::Grid;
use crate::core::{Feedback, MAX_GUESSES, WORD_LEN, Word, score};
use log::debug;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Immutable capture of a round used for undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub grid: Grid,
    pub row: usize,
    pub col: usize,
    pub status: RoundStatus,
    pub target: Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: Word,
    grid: Grid,
    row: usize,
    col: usize,
    status: RoundStatus,
    history: Vec<RoundSnapshot>,
    acknowledged: bool,
}

impl Round {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            grid: Grid::new(),
            row: 0,
            col: 0,
            status: RoundStatus::Playing,
            history: Vec::new(),
            acknowledged: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current row index, 0..6
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Current column index, 0..=5
    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[RoundSnapshot] {
        &self.history
    }

    /// Number of submitted guesses
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        match self.status {
            RoundStatus::Playing => self.row,
            RoundStatus::Won | RoundStatus::Lost => self.row + 1,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            grid: self.grid,
            row: self.row,
            col: self.col,
            status: self.status,
            target: self.target,
        }
    }

    fn push_snapshot(&mut self) {
        let snapshot = self.snapshot();
        self.history.push(snapshot);
    }

    /// Write a letter at the cursor and advance it
    ///
    /// Ignored unless the round is playing, the row has room and `letter` is
    /// an ASCII letter.
    pub fn type_char(&mut self, letter: char) -> bool {
        if self.status != RoundStatus::Playing
            || !letter.is_ascii_alphabetic()
            || self.col >= WORD_LEN
        {
            return false;
        }

        self.push_snapshot();
        self.grid.set_letter(self.row, self.col, letter.to_ascii_uppercase());
        self.col += 1;
        true
    }

    /// Erase the letter before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.status != RoundStatus::Playing || self.col == 0 {
            return false;
        }

        self.push_snapshot();
        self.col -= 1;
        self.grid.clear(self.row, self.col);
        true
    }

    /// Score the full current row against the target
    ///
    /// Returns the feedback when the row was submitted.
    pub fn submit(&mut self) -> Option<Feedback> {
        if self.status != RoundStatus::Playing || self.col != WORD_LEN {
            return None;
        }
        let guess = self.grid.word_at(self.row)?;

        self.push_snapshot();
        let feedback = score(&guess, &self.target);
        self.grid.apply_feedback(self.row, feedback);

        if feedback.is_perfect() {
            self.status = RoundStatus::Won;
        } else if self.row == MAX_GUESSES - 1 {
            self.status = RoundStatus::Lost;
        } else {
            self.row += 1;
            self.col = 0;
        }

        debug!("Guess {guess} scored {feedback}, status {:?}", self.status);
        Some(feedback)
    }

    /// Restore the state before the most recent mutating operation
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.history.pop() else {
            return false;
        };

        self.grid = prev.grid;
        self.row = prev.row;
        self.col = prev.col;
        self.status = prev.status;
        self.target = prev.target;
        true
    }

    /// Mark a finished round as counted
    ///
    /// Returns the outcome the first time it is called on a finished round,
    /// `None` afterwards or while the round is still playing.
    pub(crate) fn acknowledge(&mut self) -> Option<RoundStatus> {
        if self.acknowledged || !self.status.is_over() {
            return None;
        }
        self.acknowledged = true;
        Some(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;

    fn round(target: &str) -> Round {
        Round::new(Word::new(target).unwrap())
    }

    fn type_word(round: &mut Round, word: &str) {
        for ch in word.chars() {
            assert!(round.type_char(ch));
        }
    }

    #[test]
    fn new_round_starts_empty() {
        let r = round("COLOR");
        assert_eq!((r.row(), r.col()), (0, 0));
        assert_eq!(r.status(), RoundStatus::Playing);
        assert!(r.history().is_empty());
        assert_eq!(r.guesses_used(), 0);
    }

    #[test]
    fn type_char_uppercases_and_advances() {
        let mut r = round("COLOR");
        assert!(r.type_char('c'));
        assert_eq!(r.grid().cell(0, 0).letter(), Some('C'));
        assert_eq!(r.col(), 1);
        assert_eq!(r.history().len(), 1);
    }

    #[test]
    fn type_char_rejects_non_letters() {
        let mut r = round("COLOR");
        for ch in ['1', ' ', '!', 'é', 'ß'] {
            assert!(!r.type_char(ch));
        }
        assert_eq!(r, round("COLOR"));
    }

    #[test]
    fn type_char_ignored_when_row_full() {
        let mut r = round("COLOR");
        type_word(&mut r, "SCOOP");
        let before = r.clone();
        assert!(!r.type_char('X'));
        assert_eq!(r, before);
    }

    #[test]
    fn type_then_backspace_restores_cell_and_cursor() {
        let mut r = round("COLOR");
        type_word(&mut r, "AB");
        let cell = r.grid().cell(0, 2);
        let col = r.col();

        r.type_char('Z');
        assert!(r.backspace());

        assert_eq!(r.grid().cell(0, 2), cell);
        assert!(r.grid().cell(0, 2).is_empty());
        assert_eq!(r.grid().cell(0, 2).state(), LetterState::Unset);
        assert_eq!(r.col(), col);
    }

    #[test]
    fn backspace_at_row_start_is_noop() {
        let mut r = round("COLOR");
        assert!(!r.backspace());
        assert!(r.history().is_empty());
    }

    #[test]
    fn submit_requires_full_row() {
        let mut r = round("COLOR");
        type_word(&mut r, "SCOO");
        assert_eq!(r.submit(), None);
        assert_eq!(r.row(), 0);
        assert_eq!(r.history().len(), 4);
    }

    #[test]
    fn non_matching_guess_advances_row() {
        let mut r = round("COLOR");
        type_word(&mut r, "SCOOP");
        let feedback = r.submit().unwrap();

        assert!(!feedback.is_perfect());
        assert_eq!((r.row(), r.col()), (1, 0));
        assert_eq!(r.status(), RoundStatus::Playing);
        for cell in r.grid().row(0) {
            assert_ne!(cell.state(), LetterState::Unset);
        }
    }

    #[test]
    fn correct_guess_wins() {
        let mut r = round("COLOR");
        type_word(&mut r, "color");
        assert!(r.submit().unwrap().is_perfect());
        assert_eq!(r.status(), RoundStatus::Won);
        assert_eq!(r.guesses_used(), 1);

        // Finished rounds accept no more input
        assert!(!r.backspace());
        assert_eq!(r.submit(), None);
    }

    #[test]
    fn sixth_wrong_guess_loses() {
        let mut r = round("COLOR");
        for _ in 0..MAX_GUESSES {
            type_word(&mut r, "SCOOP");
            r.submit().unwrap();
        }
        assert_eq!(r.status(), RoundStatus::Lost);
        assert_eq!(r.row(), MAX_GUESSES - 1);
        assert_eq!(r.guesses_used(), MAX_GUESSES);
    }

    #[test]
    fn correct_guess_on_last_row_wins() {
        let mut r = round("COLOR");
        for _ in 0..MAX_GUESSES - 1 {
            type_word(&mut r, "SCOOP");
            r.submit().unwrap();
        }
        assert_eq!(r.row(), 5);

        type_word(&mut r, "COLOR");
        r.submit().unwrap();
        assert_eq!(r.status(), RoundStatus::Won);
    }

    #[test]
    fn undo_restores_exact_prior_round() {
        let mut r = round("COLOR");
        type_word(&mut r, "SCOO");

        let before = r.clone();
        r.type_char('P');
        assert!(r.undo());
        assert_eq!(r, before);

        r.type_char('P');
        let before = r.clone();
        r.submit().unwrap();
        assert!(r.undo());
        assert_eq!(r, before);

        let before = r.clone();
        r.backspace();
        assert!(r.undo());
        assert_eq!(r, before);
    }

    #[test]
    fn undo_reopens_won_round() {
        let mut r = round("COLOR");
        type_word(&mut r, "COLOR");
        r.submit();
        assert!(r.undo());
        assert_eq!(r.status(), RoundStatus::Playing);
        assert_eq!(r.col(), WORD_LEN);
    }

    #[test]
    fn undo_with_empty_history_is_noop() {
        let mut r = round("COLOR");
        assert!(!r.undo());
        assert_eq!(r, round("COLOR"));
    }

    #[test]
    fn history_tracks_actions_minus_undos() {
        let mut r = round("COLOR");
        type_word(&mut r, "SCOOP");
        r.submit();
        r.backspace(); // no-op on fresh row
        assert_eq!(r.history().len(), 6);
        r.undo();
        r.undo();
        assert_eq!(r.history().len(), 4);
    }

    #[test]
    fn acknowledge_counts_once() {
        let mut r = round("COLOR");
        assert_eq!(r.acknowledge(), None);

        type_word(&mut r, "COLOR");
        r.submit();
        assert_eq!(r.acknowledge(), Some(RoundStatus::Won));
        assert_eq!(r.acknowledge(), None);
    }
}

//! The 6×5 board of guessed letters and their feedback

use crate::core::{Feedback, LetterState, MAX_GUESSES, WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// One board square
///
/// An empty cell is always `Unset`; only scored cells carry another state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    letter: Option<char>,
    state: LetterState,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> LetterState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// Letters revealed so far, as shown beside the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSets {
    /// Letters scored Correct or Present somewhere, sorted
    pub present: Vec<char>,
    /// Letters scored Absent somewhere, sorted
    pub absent: Vec<char>,
}

/// A round's full guess history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Cell; WORD_LEN]; MAX_GUESSES],
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at (row, col)
    ///
    /// # Panics
    /// Panics if row >= 6 or col >= 5
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell; WORD_LEN] {
        &self.cells[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WORD_LEN]> {
        self.cells.iter()
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: char) {
        self.cells[row][col] = Cell {
            letter: Some(letter),
            state: LetterState::Unset,
        };
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::default();
    }

    pub(crate) fn apply_feedback(&mut self, row: usize, feedback: Feedback) {
        for (cell, state) in self.cells[row].iter_mut().zip(feedback) {
            cell.state = state;
        }
    }

    /// The word spelled by a full row, `None` while any cell is empty
    #[must_use]
    pub fn word_at(&self, row: usize) -> Option<Word> {
        let mut chars = [' '; WORD_LEN];
        for (slot, cell) in chars.iter_mut().zip(&self.cells[row]) {
            *slot = cell.letter?;
        }
        Word::try_from(chars).ok()
    }

    /// Letters known to be in the target and letters known not to be
    ///
    /// A repeated guess letter can land in both lists when the target holds
    /// fewer copies than were guessed.
    #[must_use]
    pub fn letter_sets(&self) -> LetterSets {
        let mut present = BTreeSet::new();
        let mut absent = BTreeSet::new();

        for cell in self.cells.iter().flatten() {
            let Some(letter) = cell.letter else { continue };
            match cell.state {
                LetterState::Correct | LetterState::Present => {
                    present.insert(letter);
                }
                LetterState::Absent => {
                    absent.insert(letter);
                }
                LetterState::Unset => {}
            }
        }

        LetterSets {
            present: present.into_iter().collect(),
            absent: absent.into_iter().collect(),
        }
    }

    /// Best known state per letter, for colouring a keyboard
    ///
    /// Correct beats Present beats Absent; letters never scored are missing.
    #[must_use]
    pub fn keyboard_hints(&self) -> FxHashMap<char, LetterState> {
        let mut hints = FxHashMap::default();
        for cell in self.cells.iter().flatten() {
            if let Some(letter) = cell.letter
                && cell.state != LetterState::Unset
            {
                let best = hints.entry(letter).or_insert(cell.state);
                *best = (*best).max(cell.state);
            }
        }
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score_str;

    fn grid_with(rows: &[(&str, &str)]) -> Grid {
        let mut grid = Grid::new();
        for (row, (guess, target)) in rows.iter().enumerate() {
            for (col, ch) in guess.chars().enumerate() {
                grid.set_letter(row, col, ch);
            }
            grid.apply_feedback(row, score_str(guess, target).unwrap());
        }
        grid
    }

    #[test]
    fn new_grid_is_empty_and_unset() {
        let grid = Grid::new();
        for row in grid.rows() {
            for cell in row {
                assert!(cell.is_empty());
                assert_eq!(cell.state(), LetterState::Unset);
            }
        }
    }

    #[test]
    fn clear_resets_letter_and_state() {
        let mut grid = grid_with(&[("SCOOP", "COLOR")]);
        grid.clear(0, 1);
        assert_eq!(grid.cell(0, 1), Cell::default());
    }

    #[test]
    fn word_at_requires_full_row() {
        let mut grid = Grid::new();
        for (col, ch) in "HOUS".chars().enumerate() {
            grid.set_letter(0, col, ch);
        }
        assert_eq!(grid.word_at(0), None);

        grid.set_letter(0, 4, 'E');
        assert_eq!(grid.word_at(0), Some(Word::new("HOUSE").unwrap()));
    }

    #[test]
    fn letter_sets_split_present_and_absent() {
        let grid = grid_with(&[("SCOOP", "COLOR")]);
        let sets = grid.letter_sets();
        assert_eq!(sets.present, vec!['C', 'O']);
        assert_eq!(sets.absent, vec!['P', 'S']);
    }

    #[test]
    fn letter_sets_duplicate_in_both() {
        let grid = grid_with(&[("LOLLY", "COLOR")]);
        let sets = grid.letter_sets();
        assert!(sets.present.contains(&'L'));
        assert!(sets.absent.contains(&'L'));
    }

    #[test]
    fn keyboard_hints_keep_best_state() {
        let grid = grid_with(&[("SCOOP", "COLOR"), ("COCOA", "COLOR")]);
        let hints = grid.keyboard_hints();
        assert_eq!(hints.get(&'C'), Some(&LetterState::Correct));
        assert_eq!(hints.get(&'O'), Some(&LetterState::Correct));
        assert_eq!(hints.get(&'S'), Some(&LetterState::Absent));
        assert_eq!(hints.get(&'Z'), None);
    }
}

//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState};
use crate::game::{Cell, RoundStatus};
use colored::{ColoredString, Colorize};

/// Render one board cell as a coloured three-character tile
#[must_use]
pub fn cell_tile(cell: Cell) -> ColoredString {
    let text = format!(" {} ", cell.letter().unwrap_or('·'));
    match cell.state() {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Unset => text.normal(),
    }
}

/// Render a scored guess as coloured tiles
#[must_use]
pub fn feedback_tiles(guess: &str, feedback: Feedback) -> String {
    guess
        .chars()
        .zip(feedback)
        .map(|(letter, state)| {
            let text = format!(" {letter} ");
            match state {
                LetterState::Correct => text.black().on_green().bold().to_string(),
                LetterState::Present => text.black().on_yellow().bold().to_string(),
                LetterState::Absent | LetterState::Unset => {
                    text.white().on_bright_black().to_string()
                }
            }
        })
        .collect()
}

/// Message shown under the board for a round's status
#[must_use]
pub const fn status_text(status: RoundStatus) -> &'static str {
    match status {
        RoundStatus::Playing => "",
        RoundStatus::Won => "You won this round!",
        RoundStatus::Lost => "You lost this round.",
    }
}

/// Join letters for a "letters present" style list
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "—".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

//! Terminal output formatting
//!
//! Plain-terminal rendering of boards and results for the line mode and the
//! `score` command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_summary, print_score_result, print_scoreboard};

//! Display functions for the line-based interface

use super::formatters::{cell_tile, feedback_tiles, letter_list, status_text};
use crate::core::Feedback;
use crate::game::{GameView, Grid};
use colored::Colorize;

/// Print the board with coloured tiles
pub fn print_board(grid: &Grid) {
    println!();
    for row in grid.rows() {
        let tiles: String = row.iter().map(|&cell| cell_tile(cell).to_string()).collect();
        println!("    {tiles}");
    }
    println!();
}

/// Print the tally line and, when a round is active, its status and letters
pub fn print_scoreboard(view: &GameView<'_>) {
    println!(
        "{}  {}  {}",
        format!("Wins: {}", view.wins).green().bold(),
        format!("Fails: {}", view.fails).red().bold(),
        format!("Used: {}/{}", view.used, view.pool_size).cyan()
    );

    if let Some(round) = view.round {
        let status = status_text(round.status);
        if !status.is_empty() {
            println!("{}", status.bright_yellow().bold());
        }

        let sets = round.grid.letter_sets();
        println!("Letters present: {}", letter_list(&sets.present).green());
        println!("Not in word:     {}", letter_list(&sets.absent).bright_black());
    }
}

/// Print the end-of-game summary
pub fn print_game_summary(view: &GameView<'_>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        "GAME OVER - you completed all words".bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n   Wins:  {}\n   Fails: {}\n",
        view.wins.to_string().green().bold(),
        view.fails.to_string().red().bold()
    );
}

/// Print the result of the `score` command
pub fn print_score_result(guess: &str, target: &str, feedback: Feedback) {
    println!(
        "\n{} against {}",
        guess.to_uppercase().bright_white().bold(),
        target.to_uppercase().bright_yellow().bold()
    );
    println!("\n    {}", feedback_tiles(&guess.to_uppercase(), feedback));
    println!("    {}\n", feedback.to_emoji());

    if feedback.is_perfect() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

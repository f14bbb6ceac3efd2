//! Simple line-based play mode
//!
//! Text-based game without the TUI

use crate::core::WORD_LEN;
use crate::game::{Game, RoundStatus};
use crate::output::{print_board, print_game_summary, print_scoreboard};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    /// Letters to type into the current row
    Letters(String),
    Submit,
    Back,
    Undo,
    Next,
    New,
    Help,
    Quit,
    Unknown(String),
}

impl LineCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => Self::Submit,
            ":back" | ":b" => Self::Back,
            ":undo" | ":u" => Self::Undo,
            ":next" | ":n" => Self::Next,
            ":new" => Self::New,
            ":help" | ":h" | "?" => Self::Help,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ if line.chars().all(|c| c.is_ascii_alphabetic()) => {
                Self::Letters(line.to_string())
            }
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one line of input to the game
///
/// A line of letters is typed and, if it fills the row, submitted. Letters
/// typed into an already full row are ignored and nothing is submitted. A
/// finished round is acknowledged as soon as it ends.
pub fn handle_line<R: Rng>(game: &mut Game<R>, command: &LineCommand) -> Flow {
    match command {
        LineCommand::Letters(letters) => {
            let typed = letters.chars().filter(|&letter| game.type_char(letter)).count();
            if typed > 0 && game.current().is_some_and(|round| round.col() == WORD_LEN) {
                game.submit();
            }
        }
        LineCommand::Submit => {
            game.submit();
        }
        LineCommand::Back => {
            game.backspace();
        }
        LineCommand::Undo => {
            game.undo();
        }
        LineCommand::Next => {
            game.start_round();
        }
        LineCommand::New => game.start_game(),
        LineCommand::Help | LineCommand::Unknown(_) => {}
        LineCommand::Quit => return Flow::Quit,
    }

    game.acknowledge_round();
    Flow::Continue
}

fn print_help() {
    println!("Type a guess and press Enter. An empty line submits a full row.");
    println!("Commands: :back (erase a letter), :undo, :next (next round), :new (new game), :quit\n");
}

fn render<R: Rng>(game: &Game<R>) {
    let view = game.view();
    if let Some(round) = view.round {
        print_board(round.grid);
    }
    print_scoreboard(&view);

    match game.current() {
        Some(round) if round.status() == RoundStatus::Lost => {
            println!("The word was {}", round.target().as_str().bright_yellow().bold());
            println!("Type :next for the next round.");
        }
        Some(round) if round.status() == RoundStatus::Won => {
            println!("Type :next for the next round.");
        }
        _ => {}
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(game: &mut Game<R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Logic - Line Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    game.start_game();

    loop {
        if game.is_game_over() {
            print_game_summary(&game.view());
            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => game.start_game(),
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        render(game);

        let command = LineCommand::parse(&get_user_input("Guess")?);
        match &command {
            LineCommand::Help => print_help(),
            LineCommand::Unknown(text) => println!("❌ Unknown input {text:?}, type :help\n"),
            LineCommand::Letters(_)
                if game.current().is_some_and(|round| {
                    round.status() == RoundStatus::Playing && round.col() == WORD_LEN
                }) =>
            {
                println!("Row is full: press Enter to submit or :back to erase.\n");
            }
            _ => {}
        }

        if handle_line(game, &command) == Flow::Quit {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}

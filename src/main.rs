//! Word Logic - CLI
//!
//! Five-letter word guessing game with TUI and line modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};
use word_logic::{
    commands::{run_simple, score_words},
    core::Word,
    game::Game,
    output::print_score_result,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_logic",
    about = "Guess the hidden five-letter word in six tries, round after round",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word pool file (one word per line); defaults to the built-in pool
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for the word draw order, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Score one guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The hidden target word
        target: String,
    },
}

/// Set up `env_logger`, honouring `RUST_LOG`
///
/// With a log file the default level is `info`, otherwise `warn` so the
/// terminal stays clean.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let mut builder =
                env_logger::Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(Env::default().default_filter_or("warn")),
    };

    builder.try_init()?;
    Ok(())
}

/// Load the word pool from the -w flag or the embedded list
fn load_pool(wordlist: Option<&Path>) -> Result<Vec<Word>> {
    let words = match wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };

    if words.is_empty() {
        bail!("Word list contains no valid five-letter words");
    }
    info!("Loaded {} words", words.len());
    Ok(words)
}

fn build_game(pool: Vec<Word>, seed: Option<u64>) -> Result<Game> {
    let game = match seed {
        Some(seed) => Game::seeded(pool, seed)?,
        None => Game::new(pool)?,
    };
    Ok(game)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Score { guess, target } => run_score_command(&guess, &target),
        Commands::Play => {
            let pool = load_pool(cli.wordlist.as_deref())?;
            run_play_command(build_game(pool, cli.seed)?)
        }
        Commands::Simple => {
            let pool = load_pool(cli.wordlist.as_deref())?;
            let mut game = build_game(pool, cli.seed)?;
            run_simple(&mut game)
        }
    }
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let feedback = score_words(guess, target)?;
    print_score_result(guess.trim(), target.trim(), feedback);
    Ok(())
}

fn run_play_command(game: Game) -> Result<()> {
    use word_logic::interactive::{App, run_tui};

    run_tui(App::new(game))
}

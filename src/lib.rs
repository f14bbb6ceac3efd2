//! Word Logic
//!
//! A single-player five-letter word guessing game: six guesses per round,
//! per-letter feedback, undo, and a game made of rounds over a word pool.
//!
//! # Quick Start
//!
//! ```rust
//! use word_logic::core::Word;
//! use word_logic::game::{Game, RoundStatus};
//!
//! let pool = ["apple", "brave"].map(|w| Word::new(w).unwrap());
//! let mut game = Game::seeded(pool, 1).unwrap();
//! game.start_game();
//!
//! let target = *game.current().unwrap().target();
//! for letter in target.as_str().chars() {
//!     game.type_char(letter);
//! }
//! game.submit();
//! game.acknowledge_round();
//!
//! assert_eq!(game.current().unwrap().status(), RoundStatus::Won);
//! assert_eq!(game.wins(), 1);
//! ```

// Core domain types
pub mod core;

// Round and game state machine
pub mod game;

// Word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

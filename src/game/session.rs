//! A game session: a run of rounds over a word pool
//!
//! Words are drawn uniformly at random without replacement, so each pool word
//! is played at most once per game. When the pool runs dry the game is over
//! until [`Game::start_game`] is called again.

use super::action::Action;
use super::round::{Round, RoundStatus};
use super::view::{GameView, RoundView};
use crate::core::Word;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Error type for game construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    EmptyWordPool,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordPool => write!(f, "Word pool must contain at least one word"),
        }
    }
}

impl std::error::Error for GameError {}

/// Game session state
///
/// `R` is the random source used for draws; inject a seeded one for
/// reproducible word order.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    pool: Vec<Word>,
    words_left: Vec<Word>,
    used_words: Vec<Word>,
    wins: usize,
    fails: usize,
    current: Option<Round>,
    game_over: bool,
    rng: R,
}

impl Game<StdRng> {
    /// Create a game drawing with an OS-seeded generator
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordPool` if `pool` is empty.
    pub fn new(pool: impl IntoIterator<Item = Word>) -> Result<Self, GameError> {
        Self::with_rng(pool, StdRng::from_os_rng())
    }

    /// Create a game with a reproducible draw sequence
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordPool` if `pool` is empty.
    ///
    /// # Examples
    /// ```
    /// use word_logic::core::Word;
    /// use word_logic::game::Game;
    ///
    /// let pool = ["apple", "brave"].map(|w| Word::new(w).unwrap());
    /// let mut a = Game::seeded(pool, 7).unwrap();
    /// let mut b = Game::seeded(pool, 7).unwrap();
    /// a.start_game();
    /// b.start_game();
    /// assert_eq!(a.used_words(), b.used_words());
    /// ```
    pub fn seeded(pool: impl IntoIterator<Item = Word>, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(pool, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create a game with a caller-supplied random source
    ///
    /// Duplicate pool entries are collapsed so no word can be drawn twice.
    /// No round is active until [`Game::start_game`].
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordPool` if `pool` is empty.
    pub fn with_rng(pool: impl IntoIterator<Item = Word>, rng: R) -> Result<Self, GameError> {
        let mut unique = Vec::new();
        for word in pool {
            if !unique.contains(&word) {
                unique.push(word);
            }
        }
        if unique.is_empty() {
            return Err(GameError::EmptyWordPool);
        }

        Ok(Self {
            pool: unique,
            words_left: Vec::new(),
            used_words: Vec::new(),
            wins: 0,
            fails: 0,
            current: None,
            game_over: false,
            rng,
        })
    }

    #[inline]
    #[must_use]
    pub fn wins(&self) -> usize {
        self.wins
    }

    #[inline]
    #[must_use]
    pub fn fails(&self) -> usize {
        self.fails
    }

    /// Words already drawn this game, in draw order
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[Word] {
        &self.used_words
    }

    /// Words still available to draw (unordered)
    #[inline]
    #[must_use]
    pub fn words_left(&self) -> &[Word] {
        &self.words_left
    }

    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Reset the tally and pool and begin the first round
    pub fn start_game(&mut self) {
        self.wins = 0;
        self.fails = 0;
        self.used_words.clear();
        self.words_left.clone_from(&self.pool);
        self.game_over = false;

        info!("Game started with {} words", self.pool.len());
        // The pool is never empty, so this always yields a round
        self.draw_round();
    }

    /// Begin the next round, or end the game once the pool is exhausted
    ///
    /// Ignored unless a game is in progress. A finished outgoing round is
    /// acknowledged first so its outcome is never lost.
    pub fn start_round(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.acknowledge_round();

        if self.words_left.is_empty() {
            self.current = None;
            self.game_over = true;
            info!(
                "Game over: {} wins, {} fails over {} words",
                self.wins,
                self.fails,
                self.used_words.len()
            );
            return true;
        }

        self.draw_round();
        true
    }

    fn draw_round(&mut self) {
        if self.words_left.is_empty() {
            return;
        }
        let idx = self.rng.random_range(0..self.words_left.len());
        let target = self.words_left.swap_remove(idx);
        self.used_words.push(target);
        self.current = Some(Round::new(target));

        debug!(
            "Round {} started, {} words left",
            self.used_words.len(),
            self.words_left.len()
        );
    }

    fn playing_round(&mut self) -> Option<&mut Round> {
        self.current
            .as_mut()
            .filter(|round| round.status() == RoundStatus::Playing)
    }

    pub fn type_char(&mut self, letter: char) -> bool {
        self.playing_round()
            .is_some_and(|round| round.type_char(letter))
    }

    pub fn backspace(&mut self) -> bool {
        self.playing_round().is_some_and(Round::backspace)
    }

    pub fn submit(&mut self) -> bool {
        self.playing_round()
            .and_then(Round::submit)
            .is_some()
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.current.as_mut().is_some_and(Round::undo);
        if undone {
            debug!("Undo");
        }
        undone
    }

    /// Count the current round's outcome in the tally
    ///
    /// Safe to call any number of times: a finished round is counted once,
    /// and a playing round is not counted at all.
    pub fn acknowledge_round(&mut self) -> bool {
        let Some(outcome) = self.current.as_mut().and_then(Round::acknowledge) else {
            return false;
        };

        match outcome {
            RoundStatus::Won => self.wins += 1,
            RoundStatus::Lost => self.fails += 1,
            RoundStatus::Playing => {}
        }
        true
    }

    /// Dispatch an action to the matching operation
    ///
    /// Returns whether the game state changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::StartGame => {
                self.start_game();
                true
            }
            Action::StartRound => self.start_round(),
            Action::Type(letter) => self.type_char(letter),
            Action::Backspace => self.backspace(),
            Action::Submit => self.submit(),
            Action::Undo => self.undo(),
            Action::Acknowledge => self.acknowledge_round(),
        }
    }

    /// Read-only view for rendering
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            wins: self.wins,
            fails: self.fails,
            used: self.used_words.len(),
            pool_size: self.pool.len(),
            round: self.current.as_ref().map(|round| RoundView {
                grid: round.grid(),
                status: round.status(),
                row: round.row(),
                col: round.col(),
                history_len: round.history().len(),
            }),
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GUESSES;

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn started(words: &[&str]) -> Game {
        let mut game = Game::seeded(pool(words), 42).unwrap();
        game.start_game();
        game
    }

    fn target(game: &Game) -> Word {
        *game.current().unwrap().target()
    }

    fn play_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.type_char(ch);
        }
        game.submit();
    }

    fn win_round(game: &mut Game) {
        let word = target(game);
        play_word(game, word.as_str());
    }

    fn lose_round(game: &mut Game) {
        let miss = if target(game).as_str() == "ZZZZZ" {
            "YYYYY"
        } else {
            "ZZZZZ"
        };
        for _ in 0..MAX_GUESSES {
            play_word(game, miss);
        }
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert_eq!(
            Game::seeded(Vec::new(), 1).unwrap_err(),
            GameError::EmptyWordPool
        );
    }

    #[test]
    fn operations_before_start_are_noops() {
        let mut game = Game::seeded(pool(&["APPLE"]), 1).unwrap();
        assert!(!game.type_char('A'));
        assert!(!game.backspace());
        assert!(!game.submit());
        assert!(!game.undo());
        assert!(!game.acknowledge_round());
        assert!(!game.start_round());
        assert!(game.current().is_none());
        assert!(!game.is_game_over());
    }

    #[test]
    fn start_game_draws_first_round() {
        let game = started(&["APPLE", "BRAVE", "COLOR"]);
        let round = game.current().unwrap();

        assert_eq!(game.used_words(), &[*round.target()]);
        assert_eq!(game.words_left().len(), 2);
        assert!(!game.words_left().contains(round.target()));
        assert_eq!(round.status(), RoundStatus::Playing);
        assert_eq!((game.wins(), game.fails()), (0, 0));
    }

    #[test]
    fn duplicate_pool_entries_collapse() {
        let game = Game::seeded(pool(&["APPLE", "apple", "BRAVE"]), 1).unwrap();
        assert_eq!(game.pool().len(), 2);
    }

    #[test]
    fn pool_exhaustion_ends_game() {
        let words = ["APPLE", "BRAVE", "COLOR", "DELTA"];
        let mut game = started(&words);
        for _ in 1..words.len() {
            assert!(game.start_round());
            assert!(game.current().is_some());
        }

        let mut used = game.used_words().to_vec();
        used.sort();
        assert_eq!(used, pool(&words));
        assert!(game.words_left().is_empty());

        assert!(game.start_round());
        assert!(game.is_game_over());
        assert!(game.current().is_none());

        // Game over is permanent until a new game
        assert!(!game.start_round());
        assert!(game.is_game_over());

        game.start_game();
        assert!(!game.is_game_over());
        assert_eq!(game.used_words().len(), 1);
    }

    #[test]
    fn seeded_games_draw_identically() {
        let words = ["APPLE", "BRAVE", "COLOR", "DELTA", "EAGLE"];
        let mut a = started(&words);
        let mut b = started(&words);
        for _ in 1..words.len() {
            a.start_round();
            b.start_round();
        }
        assert_eq!(a.used_words(), b.used_words());
    }

    #[test]
    fn acknowledge_counts_win_once() {
        let mut game = started(&["APPLE", "BRAVE"]);
        win_round(&mut game);

        assert!(game.acknowledge_round());
        assert!(!game.acknowledge_round());
        assert_eq!((game.wins(), game.fails()), (1, 0));

        // Moving on does not count the same round again
        game.start_round();
        assert_eq!(game.wins(), 1);
    }

    #[test]
    fn acknowledge_counts_loss() {
        let mut game = started(&["APPLE"]);
        lose_round(&mut game);
        assert_eq!(game.current().unwrap().status(), RoundStatus::Lost);

        game.acknowledge_round();
        assert_eq!((game.wins(), game.fails()), (0, 1));
    }

    #[test]
    fn acknowledge_ignores_playing_round() {
        let mut game = started(&["APPLE"]);
        assert!(!game.acknowledge_round());
        assert_eq!((game.wins(), game.fails()), (0, 0));
    }

    #[test]
    fn start_round_counts_unacknowledged_finish() {
        let mut game = started(&["APPLE", "BRAVE"]);
        win_round(&mut game);
        game.start_round();
        assert_eq!(game.wins(), 1);
    }

    #[test]
    fn undo_after_acknowledge_does_not_recount() {
        let mut game = started(&["APPLE", "BRAVE"]);
        win_round(&mut game);
        game.acknowledge_round();

        assert!(game.undo());
        assert!(game.submit());
        game.acknowledge_round();
        assert_eq!(game.wins(), 1);
    }

    #[test]
    fn start_game_resets_tally() {
        let mut game = started(&["APPLE", "BRAVE"]);
        win_round(&mut game);
        game.acknowledge_round();

        game.start_game();
        assert_eq!((game.wins(), game.fails()), (0, 0));
        assert_eq!(game.words_left().len(), 1);
    }

    #[test]
    fn finished_round_rejects_input_but_allows_undo() {
        let mut game = started(&["APPLE"]);
        win_round(&mut game);

        assert!(!game.type_char('A'));
        assert!(!game.backspace());
        assert!(!game.submit());
        assert!(game.undo());
        assert_eq!(game.current().unwrap().status(), RoundStatus::Playing);
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut game = Game::seeded(pool(&["APPLE", "BRAVE"]), 3).unwrap();
        assert!(game.apply(Action::StartGame));
        assert!(game.apply(Action::Type('a')));
        assert!(game.apply(Action::Backspace));
        assert!(game.apply(Action::Undo));
        assert!(!game.apply(Action::Submit));
        assert!(!game.apply(Action::Acknowledge));
        assert!(game.apply(Action::StartRound));
        assert_eq!(game.used_words().len(), 2);
    }

    #[test]
    fn view_reflects_state() {
        let mut game = started(&["APPLE", "BRAVE"]);
        game.type_char('Q');

        let view = game.view();
        assert_eq!(view.used, 1);
        assert_eq!(view.pool_size, 2);
        assert!(!view.game_over);
        let round = view.round.unwrap();
        assert_eq!(round.history_len, 1);
        assert_eq!(round.col, 1);
        assert_eq!(round.grid.cell(0, 0).letter(), Some('Q'));
    }
}

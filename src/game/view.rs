//! Read-only snapshot of a game for rendering

use super::grid::Grid;
use super::round::RoundStatus;

/// What a renderer needs from the game, borrowed from it
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub wins: usize,
    pub fails: usize,
    /// Words drawn so far this game
    pub used: usize,
    pub pool_size: usize,
    pub round: Option<RoundView<'a>>,
    pub game_over: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    pub grid: &'a Grid,
    pub status: RoundStatus,
    pub row: usize,
    pub col: usize,
    /// Undo steps available
    pub history_len: usize,
}

impl GameView<'_> {
    /// No game has been started yet
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.round.is_none() && !self.game_over
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.round.is_some_and(|round| round.history_len > 0)
    }
}

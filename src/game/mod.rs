//! Round and game state machine
//!
//! A [`Game`] owns the word pool, the win/fail tally and the current
//! [`Round`]. All mutation goes through `&mut Game`, one operation at a time;
//! invalid operations are silently ignored.

mod action;
mod grid;
mod round;
mod session;
mod view;

pub use action::Action;
pub use grid::{Cell, Grid, LetterSets};
pub use round::{Round, RoundSnapshot, RoundStatus};
pub use session::{Game, GameError};
pub use view::{GameView, RoundView};

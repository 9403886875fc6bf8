pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Outcome of a reveal move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The game goes on. Also reported for reveals that changed nothing.
    Continue,
    /// The requested cell held a mine and the game is lost.
    Bomb,
    /// The last clear cell was discovered and the game is won.
    Win,
}

impl RevealOutcome {
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::Bomb | Self::Win)
    }
}

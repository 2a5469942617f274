//! Errors reported by the rule engine

use thiserror::Error;

/// Reason a placement was refused. A refused move never changes the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },

    #[error("({x}, {y}) would create two free threes")]
    DoubleFreeThree { x: u8, y: u8 },

    #[error("the game is already over")]
    GameOver,
}

//! Engine error type.
//!
//! Every variant except `Persistence` is a caller contract violation:
//! the engine reports it and leaves state untouched.

use thiserror::Error;

use super::board::CellIndex;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board already has a winner or is drawn")]
    TerminalBoard,
    #[error("no empty cells left to choose from")]
    NoEmptyCells,
    #[error("history index {index} out of range (history has {len} snapshots)")]
    CursorOutOfRange { index: usize, len: usize },
    #[error("cell {0} is off the board")]
    CellOutOfRange(CellIndex),
    #[error("cell {0} is already occupied")]
    CellOccupied(CellIndex),
    #[error("pending move from revision {expected} does not match game revision {actual}")]
    StaleMove { expected: u64, actual: u64 },
    #[error("unknown difficulty {0:?}")]
    UnknownDifficulty(String),
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("invalid game state: {0}")]
    InvalidState(&'static str),
    #[error("persistence failed: {0}")]
    Persistence(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

//! Core engine types: board, settings, scores, state machine, RNG, errors.
//!
//! Everything here is rendering-agnostic. A front end reads the views on
//! `GameState` and issues its transitions; nothing in this module draws,
//! stores, or schedules anything.

pub mod board;
pub mod config;
pub mod error;
pub mod rng;
pub mod scores;
pub mod state;

pub use board::{Board, Cell, CellIndex, EmptyCells, Line, Mark, CELL_COUNT, LINES};
pub use config::{Difficulty, Settings, SettingsPatch};
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use scores::Scores;
pub use state::{GameState, Status};

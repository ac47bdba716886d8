//! # rust-ttt
//!
//! A tic-tac-toe engine with an optimal automated opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Outcome evaluation and search are pure functions over
//!    an immutable `Board`. Nothing in the rules knows about history,
//!    scores, or rendering.
//!
//! 2. **Explicit Transitions**: `GameState` changes only through its
//!    transition methods (`play`, `jump`, `reset`, `reconfigure`), each of
//!    which bumps a revision counter.
//!
//! 3. **Injectable Randomness**: Every random choice goes through the
//!    `RandomSource` trait, so games replay exactly from a seed.
//!
//! ## Architecture
//!
//! - **Persistent History**: Board history is an `im::Vector`, so the
//!   state clones in O(1) and truncating an abandoned branch is cheap.
//!
//! - **Exhaustive Search**: Minimax with alpha-beta pruning visits at most
//!   a few hundred thousand nodes from the empty board. No transposition
//!   table or depth limit.
//!
//! - **Revision-Bound Moves**: An automated move is tied to the revision it
//!   was computed for. Any intervening transition makes it stale.
//!
//! ## Modules
//!
//! - `core`: Board, marks, settings, scores, the game state machine, RNG, errors
//! - `rules`: Win/draw/in-progress classification
//! - `search`: Minimax, difficulty policies, state-space enumeration
//! - `session`: Scheduling and cancellation of the automated player's move
//! - `persist`: Versioned binary save/load behind a `Store` trait

pub mod core;
pub mod persist;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, CellIndex, Difficulty, GameError, GameRng, GameRngState, GameState, Line, Mark,
    RandomSource, Result, Scores, Settings, SettingsPatch, Status, CELL_COUNT, LINES,
};

pub use crate::rules::{evaluate, is_draw, Outcome};

pub use crate::search::{best_move, select_move, MovePolicy, SearchStats};

pub use crate::session::{AutoPlayer, PendingMove};

pub use crate::persist::{load_or_default, load_state, save_state, FileStore, MemoryStore, Store};

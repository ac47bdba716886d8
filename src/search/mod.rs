//! Adversarial search and move selection.
//!
//! ## Overview
//!
//! - `minimax`: exhaustive alpha-beta search returning the provably
//!   optimal cell, preferring faster wins and slower losses
//! - `policy`: difficulty tiers mapped to selection strategies
//! - `positions`: the full reachable state space, for analysis and tests
//!
//! The search holds no shared state. Independent boards can be searched
//! from any thread without coordination.
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Board, GameRng, Mark, Settings, Difficulty};
//! use rust_ttt::search::{best_move, select_move};
//!
//! let board: Board = "XX./.O./...".parse().unwrap();
//! assert_eq!(best_move(&board, Mark::O).unwrap(), 2);
//!
//! let settings = Settings::new(Mark::O, Difficulty::Easy);
//! let mut rng = GameRng::new(7);
//! let cell = select_move(&board, &settings, &mut rng).unwrap();
//! assert!(board.is_empty_at(cell));
//! ```

pub mod minimax;
pub mod policy;
pub mod positions;
pub mod stats;

pub use minimax::{best_move, best_move_with_stats, move_scores, MoveScores, WIN_SCORE};
pub use policy::{
    policy_for, select_move, Mixed, MovePolicy, Optimal, UniformRandom, MEDIUM_SEARCH_PROBABILITY,
};
pub use positions::{open_positions, reachable_positions};
pub use stats::SearchStats;

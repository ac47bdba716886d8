//! Turn scheduling for the automated opponent.
//!
//! The engine is single-threaded and turn-based. The only asynchronous
//! gap is the automated player's think time, modelled as a `PendingMove`
//! that is invalidated by any intervening transition.
//!
//! ```rust
//! use rust_ttt::core::{Difficulty, GameState, Mark, Settings};
//! use rust_ttt::session::AutoPlayer;
//!
//! let mut state = GameState::with_settings(Settings::new(Mark::O, Difficulty::Hard));
//! let mut auto = AutoPlayer::seeded(42);
//!
//! state.click(4).unwrap();
//! let pending = auto.poll(&state).unwrap().expect("O to move");
//! // ... wait pending.delay() ...
//! pending.apply(&mut state).unwrap();
//! assert_eq!(state.history_len(), 3);
//! ```

pub mod autoplay;

pub use autoplay::{AutoPlayer, PendingMove, MIN_THINK_DELAY, THINK_DELAY_SPREAD_MS};

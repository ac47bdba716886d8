//! Game rules: win, draw, and in-progress classification.
//!
//! The rules are pure functions over a `Board`. The state machine, the
//! search, and move selection all call into `evaluate` rather than
//! tracking results themselves.

pub mod outcome;

pub use outcome::{completed_line, evaluate, is_draw, is_full, Outcome};

//! Cumulative results across games.

use serde::{Deserialize, Serialize};

use super::board::Mark;

/// Win and draw counters.
///
/// Counters only grow, except through an explicit `clear`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for a mark.
    #[must_use]
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins = self.x_wins.saturating_add(1),
            Mark::O => self.o_wins = self.o_wins.saturating_add(1),
        }
    }

    pub fn record_draw(&mut self) {
        self.draws = self.draws.saturating_add(1);
    }

    /// Total finished games, saturating at `u32::MAX`.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.x_wins.saturating_add(self.o_wins).saturating_add(self.draws)
    }

    /// Reset all counters to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `best_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root children included.
    pub nodes: u32,

    /// Positions where the game was already decided.
    pub terminal_nodes: u32,

    /// Alpha-beta cutoffs (remaining siblings skipped).
    pub cutoffs: u32,

    /// Deepest ply reached below the root move.
    pub max_depth: u8,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate nodes searched per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    pub(crate) fn visit(&mut self, depth: u8) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

//! Opponent settings.
//!
//! `Settings` is independent of move history: changing it never alters
//! past snapshots. `SettingsPatch` carries a partial update where every
//! unset field keeps its previous value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::board::Mark;
use super::error::GameError;

/// How the automated opponent picks moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Coin flip between a random cell and the optimal move.
    #[default]
    Medium,
    /// Always the optimal move.
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase name used for display and parsing.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::UnknownDifficulty(s.to_string()))
    }
}

/// Automated opponent configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Settings {
    /// Whether the automated opponent plays at all.
    pub enabled: bool,

    /// The mark the automated opponent plays.
    pub automated_mark: Mark,

    /// Move selection tier.
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            automated_mark: Mark::O,
            difficulty: Difficulty::Medium,
        }
    }
}

impl Settings {
    /// Create settings with the opponent enabled.
    #[must_use]
    pub fn new(automated_mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            enabled: true,
            automated_mark,
            difficulty,
        }
    }

    /// Settings with the automated opponent switched off.
    #[must_use]
    pub fn human_only() -> Self {
        Self::default().with_enabled(false)
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_automated_mark(mut self, mark: Mark) -> Self {
        self.automated_mark = mark;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Merge a partial update into these settings.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(mark) = patch.automated_mark {
            self.automated_mark = mark;
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
    }
}

/// Partial settings update. `None` fields are left unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub enabled: Option<bool>,
    pub automated_mark: Option<Mark>,
    pub difficulty: Option<Difficulty>,
}

impl SettingsPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn automated_mark(mut self, mark: Mark) -> Self {
        self.automated_mark = Some(mark);
        self
    }

    #[must_use]
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Check whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.automated_mark.is_none() && self.difficulty.is_none()
    }
}

//! Game state machine with time-travel history.
//!
//! ## History
//!
//! History is an ordered list of immutable board snapshots. Index 0 is
//! always the empty board and is never removed. The cursor selects the
//! active snapshot; jumping moves the cursor without touching history,
//! and playing from a rewound cursor discards every snapshot after it.
//!
//! Snapshots live in an `im::Vector`, so cloning a `GameState` is O(1)
//! and truncating past the cursor shares structure with the old branch.
//!
//! ## Derived status
//!
//! There is no stored phase. Whether the game is in progress, won, or
//! drawn is recomputed from the board at the cursor on demand.
//!
//! ## Revisions
//!
//! Every transition bumps `revision`. A move computed for an earlier
//! revision, or for a different board, is stale and must not be applied
//! (see `session::PendingMove`).

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::board::{Board, Cell, CellIndex, Line, Mark};
use super::config::{Settings, SettingsPatch};
use super::error::{GameError, Result};
use super::scores::Scores;
use crate::rules::{evaluate, is_draw, Outcome};

/// Player-facing status of the active board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Game in progress; this mark moves next.
    Next(Mark),
    Winner(Mark),
    Draw,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Next(mark) => write!(f, "Next: {mark}"),
            Status::Winner(mark) => write!(f, "Winner: {mark}"),
            Status::Draw => write!(f, "Draw!"),
        }
    }
}

/// Complete game state: history, cursor, turn, scores, and settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vector<Board>,
    cursor: usize,
    x_is_next: bool,
    scores: Scores,
    settings: Settings,
    revision: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game with default settings and zero scores.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Fresh game with the given settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            history: Vector::unit(Board::empty()),
            cursor: 0,
            x_is_next: true,
            scores: Scores::default(),
            settings,
            revision: 0,
        }
    }

    // === Views ===

    /// All snapshots, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Board> {
        &self.history
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the active snapshot.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The mark whose turn it is.
    #[must_use]
    pub fn current_mark(&self) -> Mark {
        if self.x_is_next {
            Mark::X
        } else {
            Mark::O
        }
    }

    #[must_use]
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Transition counter, bumped by every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The active board.
    #[must_use]
    pub fn current_board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Outcome of the active board.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Line to highlight, if the active board is won.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome().winning_line()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Win { mark, .. } => Status::Winner(mark),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::Next(self.current_mark()),
        }
    }

    /// Cell changed by the move leading to the active snapshot.
    #[must_use]
    pub fn last_move(&self) -> Option<CellIndex> {
        let previous = self.cursor.checked_sub(1)?;
        self.history[previous].first_difference(self.current_board())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    // === Transitions ===

    /// Append a snapshot after the cursor.
    ///
    /// Snapshots after the cursor are discarded first. The caller builds
    /// `board` from the active board and supplies `is_draw`, its own draw
    /// check. Wins are detected here and scored; the draw counter follows
    /// the hint only when the board is not a win.
    ///
    /// Returns the outcome of the new board.
    pub fn play(&mut self, board: Board, is_draw: bool) -> Outcome {
        self.history.truncate(self.cursor + 1);
        self.history.push_back(board);
        self.cursor = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        let outcome = evaluate(&board);
        match outcome {
            Outcome::Win { mark, .. } => self.scores.record_win(mark),
            _ if is_draw => self.scores.record_draw(),
            _ => {}
        }
        self.bump();

        debug!(
            "play: snapshot {} ({} moves), outcome {outcome:?}",
            self.cursor,
            board.occupied_count()
        );
        outcome
    }

    /// Move the cursor to an existing snapshot.
    ///
    /// Turn parity follows the index: even means X moves next.
    ///
    /// # Errors
    ///
    /// `CursorOutOfRange` if `index >= history_len()`.
    pub fn jump(&mut self, index: usize) -> Result<()> {
        let len = self.history.len();
        if index >= len {
            return Err(GameError::CursorOutOfRange { index, len });
        }

        self.cursor = index;
        self.x_is_next = index % 2 == 0;
        self.bump();

        debug!("jump: cursor {index} of {len}");
        Ok(())
    }

    /// Step back one snapshot. Returns `false` at the start of history.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.jump(self.cursor - 1).is_ok()
    }

    /// Step forward one snapshot. Returns `false` at the end of history.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.jump(self.cursor + 1).is_ok()
    }

    /// Start a new game. Scores and settings are kept.
    pub fn reset(&mut self) {
        self.history = Vector::unit(Board::empty());
        self.cursor = 0;
        self.x_is_next = true;
        self.bump();

        debug!("reset: scores {:?}", self.scores);
    }

    /// Merge a partial settings update.
    pub fn reconfigure(&mut self, patch: SettingsPatch) {
        self.settings.apply(patch);
        self.bump();

        debug!("reconfigure: {:?}", self.settings);
    }

    /// Zero all score counters.
    pub fn reset_scores(&mut self) {
        self.scores.clear();
    }

    /// Place the current mark at `index` on the active board.
    ///
    /// This is the caller-side move builder: clicks on occupied cells or
    /// on a won board are ignored and return `Ok(false)`.
    ///
    /// # Errors
    ///
    /// `CellOutOfRange` if `index >= 9`.
    pub fn click(&mut self, index: CellIndex) -> Result<bool> {
        let current = *self.current_board();
        let next = match current.with_mark(index, self.current_mark()) {
            Ok(next) => next,
            Err(GameError::CellOccupied(_)) => return Ok(false),
            Err(e) => return Err(e),
        };
        if self.outcome().winner().is_some() {
            return Ok(false);
        }

        self.play(next, is_draw(&next));
        Ok(true)
    }

    /// Check structural invariants of a state from an untrusted source.
    ///
    /// # Errors
    ///
    /// `InvalidState` describing the first broken invariant.
    pub fn validate(&self) -> Result<()> {
        if self.history.is_empty() {
            return Err(GameError::InvalidState("history is empty"));
        }
        if self.history[0] != Board::empty() {
            return Err(GameError::InvalidState("first snapshot is not the empty board"));
        }
        if self.cursor >= self.history.len() {
            return Err(GameError::InvalidState("cursor past end of history"));
        }
        if self.x_is_next != (self.history[self.cursor].occupied_count() % 2 == 0) {
            return Err(GameError::InvalidState("turn parity disagrees with the active board"));
        }

        let pairs = self.history.iter().zip(self.history.iter().skip(1));
        for (before, after) in pairs {
            if !is_single_move(before, after) {
                return Err(GameError::InvalidState("snapshot does not follow its predecessor"));
            }
        }
        Ok(())
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// `after` is `before` plus one mark, placed by the side due to move.
fn is_single_move(before: &Board, after: &Board) -> bool {
    let mut changed = before.cells().iter().zip(after.cells()).filter(|(b, a)| b != a);
    match (changed.next(), changed.next()) {
        (Some((Cell::Empty, Cell::Marked(mark))), None) => *mark == before.next_mark(),
        _ => false,
    }
}

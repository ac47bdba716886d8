//! Scheduling of the automated player's turn.
//!
//! An automated turn has one suspension point: between choosing a move
//! and applying it, the front end may wait out a think delay. `poll`
//! captures the state revision and the active board along with the chosen
//! move; `apply` refuses the move if any transition happened in between or
//! the state now shows a different board, so a reset, jump, settings change,
//! or swapped-in game cancels a pending move.

use std::time::Duration;

use log::{debug, warn};

use crate::core::board::{Board, CellIndex, Mark};
use crate::core::error::{GameError, Result};
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::GameState;
use crate::rules::{is_draw, Outcome};
use crate::search::select_move;

/// Shortest think delay before an automated move is shown.
pub const MIN_THINK_DELAY: Duration = Duration::from_millis(300);

/// Random extra delay on top of `MIN_THINK_DELAY`, in milliseconds.
pub const THINK_DELAY_SPREAD_MS: f64 = 200.0;

/// An automated move computed for a specific state revision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingMove {
    revision: u64,
    source: Board,
    cell: CellIndex,
    mark: Mark,
    board: Board,
    is_draw: bool,
    delay: Duration,
}

impl PendingMove {
    /// Revision of the state this move was computed for.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn cell(&self) -> CellIndex {
        self.cell
    }

    #[must_use]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Board the move was computed from.
    #[must_use]
    pub fn source(&self) -> &Board {
        &self.source
    }

    /// Board after the move.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// How long a front end should wait before applying.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Check whether the game has moved on since this move was chosen.
    ///
    /// Revisions are per-state counters, so a different game can sit at the
    /// same revision. The active board and mark to move must match too.
    #[must_use]
    pub fn is_stale(&self, state: &GameState) -> bool {
        state.revision() != self.revision
            || *state.current_board() != self.source
            || state.current_mark() != self.mark
    }

    /// Apply the move through `GameState::play`.
    ///
    /// # Errors
    ///
    /// `StaleMove` if the state changed after `poll`; the state is left
    /// untouched and the move is dropped.
    pub fn apply(self, state: &mut GameState) -> Result<Outcome> {
        if self.is_stale(state) {
            warn!(
                "discarding stale automated move at cell {} (computed at revision {}, game at {})",
                self.cell,
                self.revision,
                state.revision()
            );
            return Err(GameError::StaleMove {
                expected: self.revision,
                actual: state.revision(),
            });
        }
        Ok(state.play(self.board, self.is_draw))
    }
}

/// Drives the automated opponent.
#[derive(Clone, Debug)]
pub struct AutoPlayer<R: RandomSource = GameRng> {
    rng: R,
}

impl AutoPlayer<GameRng> {
    /// Automated player with an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// Automated player with a seeded RNG.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<R: RandomSource> AutoPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Check whether the automated player should move now.
    ///
    /// True when the opponent is enabled, it is the automated mark's
    /// turn, and the active board is still open.
    #[must_use]
    pub fn is_automated_turn(state: &GameState) -> bool {
        let settings = state.settings();
        settings.enabled
            && state.current_mark() == settings.automated_mark
            && !state.outcome().is_terminal()
    }

    /// Choose the automated move for the current state, if it is due.
    ///
    /// The returned move is bound to the current revision.
    pub fn poll(&mut self, state: &GameState) -> Result<Option<PendingMove>> {
        if !Self::is_automated_turn(state) {
            return Ok(None);
        }

        let settings = state.settings();
        let current = state.current_board();
        let cell = select_move(current, settings, &mut self.rng)?;
        let board = current.with_mark(cell, settings.automated_mark)?;
        let extra_ms = self.rng.gen_unit() * THINK_DELAY_SPREAD_MS;
        let delay = MIN_THINK_DELAY + Duration::from_micros((extra_ms * 1000.0) as u64);

        debug!(
            "automated {} ({}) chose cell {cell} at revision {}",
            settings.automated_mark,
            settings.difficulty,
            state.revision()
        );

        Ok(Some(PendingMove {
            revision: state.revision(),
            source: *current,
            cell,
            mark: settings.automated_mark,
            board,
            is_draw: is_draw(&board),
            delay,
        }))
    }

    /// Poll and apply immediately, skipping the think delay.
    ///
    /// Returns the outcome if a move was made.
    pub fn take_turn(&mut self, state: &mut GameState) -> Result<Option<Outcome>> {
        match self.poll(state)? {
            Some(pending) => pending.apply(state).map(Some),
            None => Ok(None),
        }
    }
}

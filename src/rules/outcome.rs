//! Terminal-state detection.
//!
//! `evaluate` is the single source of truth for whether a board is won,
//! drawn, or still open. Outcomes are never stored; every caller
//! recomputes them from a board.

use serde::{Deserialize, Serialize};

use crate::core::board::{Board, Cell, Line, Mark, LINES};

/// Classification of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line complete and at least one empty cell.
    InProgress,
    /// `mark` holds all three cells of `line`.
    Win { mark: Mark, line: Line },
    /// Every cell filled and no line complete.
    Draw,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(mark),
            _ => None,
        }
    }

    /// The completed line, for highlighting.
    #[must_use]
    pub const fn winning_line(self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Classify a board.
///
/// Lines are checked in `LINES` order and the first complete one wins.
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = completed_line(board) {
        return Outcome::Win { mark, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

/// First complete line and its owner.
#[must_use]
pub fn completed_line(board: &Board) -> Option<(Mark, Line)> {
    let cells = board.cells();
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match cells[a] {
            Cell::Marked(mark) if cells[b] == cells[a] && cells[c] == cells[a] => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Check if every cell holds a mark.
#[must_use]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// Full board with no completed line.
///
/// This is the check callers run before `GameState::play` to supply the
/// draw hint.
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    completed_line(board).is_none() && is_full(board)
}

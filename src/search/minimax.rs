//! Exhaustive minimax with alpha-beta pruning.
//!
//! The automated mark always maximizes and its opponent always minimizes,
//! whichever side opened the game. Terminal positions score
//! `10 - depth` for a win and `depth - 10` for a loss, so among won
//! lines the fastest is preferred and among lost lines the slowest.
//!
//! Moves are tried in ascending cell order and the root keeps the first
//! move with the strictly highest score, so the result is a pure function
//! of `(board, mark)`.

use std::time::Instant;

use log::debug;
use smallvec::SmallVec;

use crate::core::board::{Board, CellIndex, Mark, CELL_COUNT};
use crate::core::error::{GameError, Result};
use crate::rules::{evaluate, Outcome};

use super::stats::SearchStats;

/// Score of a win on the move directly after the root.
pub const WIN_SCORE: i32 = 10;

/// Root move scores, in ascending cell order.
pub type MoveScores = SmallVec<[(CellIndex, i32); CELL_COUNT]>;

/// Pick the optimal move for `automated` on a non-terminal board.
///
/// # Errors
///
/// `TerminalBoard` if the board is already won or drawn.
pub fn best_move(board: &Board, automated: Mark) -> Result<CellIndex> {
    best_move_with_stats(board, automated).map(|(index, _)| index)
}

/// Like `best_move`, also returning search statistics.
pub fn best_move_with_stats(board: &Board, automated: Mark) -> Result<(CellIndex, SearchStats)> {
    let start = Instant::now();
    let (scores, mut stats) = search_root(board, automated)?;

    let mut best: Option<(CellIndex, i32)> = None;
    for &(index, score) in &scores {
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    let (index, score) = best.ok_or(GameError::NoEmptyCells)?;

    stats.time_us = start.elapsed().as_micros() as u64;
    debug!(
        "{automated} best move {index} (score {score}, {} nodes, {} cutoffs, {}us, {:.0}/s)",
        stats.nodes,
        stats.cutoffs,
        stats.time_us,
        stats.nodes_per_second()
    );

    Ok((index, stats))
}

/// Score every legal root move for `automated`.
///
/// Each root move is searched with a fresh `(-inf, +inf)` window, so the
/// returned scores are exact minimax values rather than bounds.
pub fn move_scores(board: &Board, automated: Mark) -> Result<MoveScores> {
    search_root(board, automated).map(|(scores, _)| scores)
}

fn search_root(board: &Board, automated: Mark) -> Result<(MoveScores, SearchStats)> {
    if evaluate(board).is_terminal() {
        return Err(GameError::TerminalBoard);
    }

    let mut search = Minimax {
        automated,
        stats: SearchStats::new(),
    };

    let scores = board
        .empty_cells()
        .into_iter()
        .map(|index| {
            let child = board.placed(index, automated);
            (index, search.score(&child, 0, false, i32::MIN, i32::MAX))
        })
        .collect();

    Ok((scores, search.stats))
}

struct Minimax {
    automated: Mark,
    stats: SearchStats,
}

impl Minimax {
    fn score(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.visit(depth);

        match evaluate(board) {
            Outcome::Win { mark, .. } => {
                self.stats.terminal_nodes += 1;
                return terminal_score(mark, self.automated, depth);
            }
            Outcome::Draw => {
                self.stats.terminal_nodes += 1;
                return 0;
            }
            Outcome::InProgress => {}
        }

        let to_move = if maximizing {
            self.automated
        } else {
            self.automated.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in board.empty_cells() {
            let child = board.placed(index, to_move);
            let score = self.score(&child, depth + 1, !maximizing, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

fn terminal_score(winner: Mark, automated: Mark, depth: u8) -> i32 {
    if winner == automated {
        WIN_SCORE - i32::from(depth)
    } else {
        i32::from(depth) - WIN_SCORE
    }
}

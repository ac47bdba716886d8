//! Enumeration of every position reachable in legal play.

use rustc_hash::FxHashSet;

use crate::core::board::Board;
use crate::rules::evaluate;

/// Every board reachable from the empty board with X moving first and
/// play stopping at the first win or draw. Includes the empty board.
#[must_use]
pub fn reachable_positions() -> FxHashSet<Board> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![Board::empty()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if evaluate(&board).is_terminal() {
            continue;
        }
        let mark = board.next_mark();
        stack.extend(board.empty_cells().into_iter().map(|i| board.placed(i, mark)));
    }

    seen
}

/// Reachable positions where the game is still open.
#[must_use]
pub fn open_positions() -> Vec<Board> {
    let mut open: Vec<Board> = reachable_positions()
        .into_iter()
        .filter(|board| !evaluate(board).is_terminal())
        .collect();
    open.sort_by_key(|board| board.occupied_count());
    open
}

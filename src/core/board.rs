//! Board representation: marks, cells, and the fixed set of winning lines.
//!
//! ## Board
//!
//! A `Board` is a 9-cell array in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! Boards are `Copy` values. History snapshots and search nodes are
//! independent copies, so nothing is ever mutated after it is stored.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::error::{GameError, Result};

/// Index of a cell on the board (0-8, row-major).
pub type CellIndex = usize;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Empty cells of a board, stored inline.
pub type EmptyCells = SmallVec<[CellIndex; CELL_COUNT]>;

/// A player's symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Mark {
    /// Returns the other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used for display and parsing.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// Three cell indices forming a row, column, or diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [CellIndex; 3]);

impl Line {
    /// The three cells of this line.
    #[must_use]
    pub const fn cells(self) -> [CellIndex; 3] {
        self.0
    }

    /// Check whether the line passes through a cell.
    #[must_use]
    pub fn contains(self, index: CellIndex) -> bool {
        self.0.contains(&index)
    }
}

/// All winning lines, in evaluation order: rows, columns, diagonals.
///
/// Order matters: when a malformed board completes more than one line,
/// the earliest line in this list is reported.
pub const LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

/// A 3x3 board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// The empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from raw cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get a cell, or `None` if the index is off the board.
    #[must_use]
    pub fn cell(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check whether a cell is on the board and empty.
    #[must_use]
    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        matches!(self.cell(index), Some(Cell::Empty))
    }

    /// Empty cell indices in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// The mark due to move if play alternated from an empty board with X first.
    #[must_use]
    pub fn next_mark(&self) -> Mark {
        if self.occupied_count() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Return a copy of this board with `mark` placed at `index`.
    ///
    /// # Errors
    ///
    /// - `CellOutOfRange` if `index >= 9`
    /// - `CellOccupied` if the cell already holds a mark
    pub fn with_mark(&self, index: CellIndex, mark: Mark) -> Result<Board> {
        match self.cell(index) {
            None => Err(GameError::CellOutOfRange(index)),
            Some(Cell::Marked(_)) => Err(GameError::CellOccupied(index)),
            Some(Cell::Empty) => Ok(self.placed(index, mark)),
        }
    }

    /// Unchecked placement for callers that already know the cell is empty.
    pub(crate) fn placed(mut self, index: CellIndex, mark: Mark) -> Board {
        self.cells[index] = Cell::Marked(mark);
        self
    }

    /// First cell that differs between two boards.
    #[must_use]
    pub fn first_difference(&self, other: &Board) -> Option<CellIndex> {
        (0..CELL_COUNT).find(|&i| self.cells[i] != other.cells[i])
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * 3 + col] {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
            }
        }
        Ok(())
    }
}

/// Parse nine cells from `X`, `O`, and `.`/`-`/`_` for empty.
///
/// Whitespace and `|` separators are ignored, so the `Display` output
/// parses back.
///
/// ```
/// use rust_ttt::core::{Board, Cell, Mark};
///
/// let board: Board = "XO. / .X. / ..O".parse().unwrap();
/// assert_eq!(board.cell(0), Some(Cell::Marked(Mark::X)));
/// assert_eq!(board.cell(2), Some(Cell::Empty));
/// ```
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => {
                    let reason = format!("unexpected character {other:?}");
                    return Err(GameError::InvalidBoard(reason));
                }
            };
            if count == CELL_COUNT {
                return Err(GameError::InvalidBoard("more than 9 cells".to_string()));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(GameError::InvalidBoard(format!("expected 9 cells, found {count}")));
        }

        Ok(Board::from_cells(cells))
    }
}

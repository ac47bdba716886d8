//! Move selection policies for each difficulty tier.
//!
//! Policies are trait-based so callers can plug in their own:
//! - `UniformRandom`: any empty cell (Easy)
//! - `Mixed`: optimal with some probability, else random (Medium)
//! - `Optimal`: always the minimax move (Hard)

use log::trace;

use crate::core::board::{Board, CellIndex, EmptyCells, Mark};
use crate::core::config::{Difficulty, Settings};
use crate::core::error::{GameError, Result};
use crate::core::rng::RandomSource;
use crate::rules::evaluate;

use super::minimax::best_move;

/// Chance that Medium consults the search instead of picking at random.
pub const MEDIUM_SEARCH_PROBABILITY: f64 = 0.5;

/// Strategy for choosing the automated player's cell.
pub trait MovePolicy {
    /// Choose a cell for `mark` from `empty`, the non-empty list of
    /// empty cells of a non-terminal `board`.
    fn choose(
        &self,
        board: &Board,
        empty: &EmptyCells,
        mark: Mark,
        rng: &mut dyn RandomSource,
    ) -> Result<CellIndex>;
}

/// Uniformly random empty cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl MovePolicy for UniformRandom {
    fn choose(
        &self,
        _board: &Board,
        empty: &EmptyCells,
        _mark: Mark,
        rng: &mut dyn RandomSource,
    ) -> Result<CellIndex> {
        if empty.is_empty() {
            return Err(GameError::NoEmptyCells);
        }
        // Caller-supplied sources are not trusted to stay in range.
        empty
            .get(rng.gen_index(empty.len()))
            .copied()
            .ok_or(GameError::NoEmptyCells)
    }
}

/// Optimal move with probability `search_probability`, random otherwise.
#[derive(Clone, Copy, Debug)]
pub struct Mixed {
    search_probability: f64,
}

impl Mixed {
    /// Mixed policy searching with the given probability.
    ///
    /// The probability is clamped to `[0, 1]`; NaN counts as 0.
    #[must_use]
    pub fn new(search_probability: f64) -> Self {
        let search_probability = if search_probability.is_nan() {
            0.0
        } else {
            search_probability.clamp(0.0, 1.0)
        };
        Self { search_probability }
    }

    #[must_use]
    pub fn search_probability(&self) -> f64 {
        self.search_probability
    }
}

impl Default for Mixed {
    fn default() -> Self {
        Self::new(MEDIUM_SEARCH_PROBABILITY)
    }
}

impl MovePolicy for Mixed {
    fn choose(
        &self,
        board: &Board,
        empty: &EmptyCells,
        mark: Mark,
        rng: &mut dyn RandomSource,
    ) -> Result<CellIndex> {
        if rng.gen_bool(self.search_probability) {
            trace!("mixed policy: searching");
            Optimal.choose(board, empty, mark, rng)
        } else {
            trace!("mixed policy: random");
            UniformRandom.choose(board, empty, mark, rng)
        }
    }
}

/// Always the minimax move.
#[derive(Clone, Copy, Debug, Default)]
pub struct Optimal;

impl MovePolicy for Optimal {
    fn choose(
        &self,
        board: &Board,
        _empty: &EmptyCells,
        mark: Mark,
        _rng: &mut dyn RandomSource,
    ) -> Result<CellIndex> {
        best_move(board, mark)
    }
}

/// The policy backing a difficulty tier.
#[must_use]
pub fn policy_for(difficulty: Difficulty) -> Box<dyn MovePolicy> {
    match difficulty {
        Difficulty::Easy => Box::new(UniformRandom),
        Difficulty::Medium => Box::new(Mixed::default()),
        Difficulty::Hard => Box::new(Optimal),
    }
}

/// Choose the automated player's move under the configured difficulty.
///
/// # Errors
///
/// - `NoEmptyCells` if the board is full
/// - `TerminalBoard` if the board is already won
pub fn select_move(
    board: &Board,
    settings: &Settings,
    rng: &mut dyn RandomSource,
) -> Result<CellIndex> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(GameError::NoEmptyCells);
    }
    if evaluate(board).is_terminal() {
        return Err(GameError::TerminalBoard);
    }

    let policy = policy_for(settings.difficulty);
    let index = policy.choose(board, &empty, settings.automated_mark, rng)?;
    trace!("{} selected cell {index} for {}", settings.difficulty, settings.automated_mark);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;

    /// Random source that replays fixed answers.
    struct Scripted {
        index: usize,
        coin: bool,
    }

    impl RandomSource for Scripted {
        fn gen_index(&mut self, len: usize) -> usize {
            self.index.min(len - 1)
        }

        fn gen_bool(&mut self, _probability: f64) -> bool {
            self.coin
        }

        fn gen_unit(&mut self) -> f64 {
            0.0
        }
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn settings(difficulty: Difficulty) -> Settings {
        Settings::new(Mark::O, difficulty)
    }

    #[test]
    fn test_easy_picks_from_empty_cells() {
        // X threatens 2; easy does not care.
        let b = board("XX./.O./...");
        let mut rng = Scripted { index: 0, coin: true };
        assert_eq!(select_move(&b, &settings(Difficulty::Easy), &mut rng), Ok(2));

        let mut rng = Scripted { index: 1, coin: true };
        assert_eq!(select_move(&b, &settings(Difficulty::Easy), &mut rng), Ok(3));
    }

    #[test]
    fn test_easy_always_legal() {
        let b = board("XO./.X./O..");
        let mut rng = GameRng::new(5);
        for _ in 0..100 {
            let index = select_move(&b, &settings(Difficulty::Easy), &mut rng).unwrap();
            assert!(b.is_empty_at(index));
        }
    }

    #[test]
    fn test_medium_follows_coin() {
        let b = board("XX./.O./...");

        let mut heads = Scripted { index: 4, coin: true };
        assert_eq!(select_move(&b, &settings(Difficulty::Medium), &mut heads), Ok(2));

        let mut tails = Scripted { index: 4, coin: false };
        assert_eq!(select_move(&b, &settings(Difficulty::Medium), &mut tails), Ok(7));
    }

    #[test]
    fn test_hard_blocks() {
        let b = board("XX./.O./...");
        let mut rng = Scripted { index: 5, coin: false };
        assert_eq!(select_move(&b, &settings(Difficulty::Hard), &mut rng), Ok(2));
    }

    #[test]
    fn test_full_board_rejected() {
        let b = board("XOX/XOO/OXX");
        let mut rng = GameRng::new(1);
        for difficulty in Difficulty::ALL {
            assert_eq!(
                select_move(&b, &settings(difficulty), &mut rng),
                Err(GameError::NoEmptyCells)
            );
        }
    }

    #[test]
    fn test_won_board_rejected() {
        let b = board("XXX/OO./...");
        let mut rng = GameRng::new(1);
        for difficulty in Difficulty::ALL {
            assert_eq!(
                select_move(&b, &settings(difficulty), &mut rng),
                Err(GameError::TerminalBoard)
            );
        }
    }

    #[test]
    fn test_seeded_selection_reproducible() {
        let b = board("X../.../...");
        let mut a = GameRng::new(99);
        let mut c = GameRng::new(99);
        for _ in 0..20 {
            assert_eq!(
                select_move(&b, &settings(Difficulty::Medium), &mut a),
                select_move(&b, &settings(Difficulty::Medium), &mut c)
            );
        }
    }

    /// Source that ignores the requested range.
    struct OutOfRange;

    impl RandomSource for OutOfRange {
        fn gen_index(&mut self, len: usize) -> usize {
            len + 3
        }

        fn gen_bool(&mut self, _probability: f64) -> bool {
            false
        }

        fn gen_unit(&mut self) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_out_of_range_source_is_an_error() {
        let b = board("XX./.O./...");
        let mut rng = OutOfRange;
        assert_eq!(
            select_move(&b, &settings(Difficulty::Easy), &mut rng),
            Err(GameError::NoEmptyCells)
        );
        assert_eq!(
            select_move(&b, &settings(Difficulty::Medium), &mut rng),
            Err(GameError::NoEmptyCells)
        );
    }

    #[test]
    fn test_uniform_random_on_empty_list() {
        let b = board("XOX/XOO/OXX");
        let mut rng = GameRng::new(1);
        let empty = EmptyCells::new();
        assert_eq!(
            UniformRandom.choose(&b, &empty, Mark::O, &mut rng),
            Err(GameError::NoEmptyCells)
        );
    }

    #[test]
    fn test_mixed_probability_clamped() {
        assert_eq!(Mixed::new(1.5).search_probability(), 1.0);
        assert_eq!(Mixed::new(-0.2).search_probability(), 0.0);
        assert_eq!(Mixed::new(f64::NAN).search_probability(), 0.0);
        assert_eq!(Mixed::default().search_probability(), MEDIUM_SEARCH_PROBABILITY);

        // Out-of-range input reaches a real RNG without panicking.
        let b = board("XX./.O./...");
        let empty = b.empty_cells();
        let mut rng = GameRng::new(3);
        for probability in [2.0, -1.0, f64::INFINITY] {
            let cell = Mixed::new(probability).choose(&b, &empty, Mark::O, &mut rng).unwrap();
            assert!(b.is_empty_at(cell));
        }
        assert_eq!(Mixed::new(7.0).choose(&b, &empty, Mark::O, &mut rng), Ok(2));
    }
}

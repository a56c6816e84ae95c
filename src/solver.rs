//! This module contains the logic for solving puzzles.
//!
//! Most importantly, this module contains the definition of the [Outcome]
//! enumeration, which classifies every solve attempt, and the [solve]
//! function as the generally usable entry point. The engine behind it is the
//! [StrategicBacktrackingSolver], which interleaves constraint propagation
//! with a bounded backtracking search.

pub mod strategy;

use crate::{Cell, Grid, SIZE};
use crate::error::Contradiction;
use crate::solver::strategy::{
    CompositeStrategy,
    NakedSingleStrategy,
    OnlyCellStrategy,
    Strategy
};

/// An enumeration of the different ways an attempt to solve a puzzle line
/// can end. Exactly one of these variants is produced for every input, and
/// it is immutable once produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {

    /// Indicates that a complete, constraint-satisfying assignment was
    /// found, which is wrapped in this instance.
    Solved(Grid),

    /// Indicates that the given clues are over-constrained, that is, the
    /// puzzle has no valid completion.
    NoSolution,

    /// Indicates that the line does not encode a full 81-cell grid, either
    /// because it is too short or because it contains invalid characters.
    /// Solving never starts in this case.
    InsufficientInput
}

impl Outcome {

    /// Indicates whether this outcome is [Solved](Outcome::Solved).
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    /// Gets the digits of the solved grid in left-to-right, top-to-bottom
    /// order. A solved grid never contains a 0. For the
    /// [NoSolution](Outcome::NoSolution) and
    /// [InsufficientInput](Outcome::InsufficientInput) outcomes there is no
    /// grid to report, so `None` is returned.
    pub fn digits(&self) -> Option<Vec<usize>> {
        match self {
            Outcome::Solved(grid) => Some(grid.digits()),
            Outcome::NoSolution => None,
            Outcome::InsufficientInput => None
        }
    }
}

/// The [Strategy] with which [solve] drives propagation: naked singles
/// followed by hidden singles.
pub type DefaultStrategy =
    CompositeStrategy<NakedSingleStrategy, OnlyCellStrategy>;

/// Finds the open cell for which there are the fewest remaining candidates
/// and returns its coordinates in the form `(column, row)`. Ties are broken
/// towards the lowest row-major index, which keeps the search deterministic.
fn find_fewest_candidates(grid: &Grid) -> (usize, usize) {
    let mut min_column = 0usize;
    let mut min_row = 0usize;
    let mut min_candidates = SIZE + 1;

    for row in 0..SIZE {
        for column in 0..SIZE {
            if let Cell::Open(candidates) = grid.cell(column, row).unwrap() {
                if candidates.len() < min_candidates {
                    min_column = column;
                    min_row = row;
                    min_candidates = candidates.len();
                }
            }
        }
    }

    (min_column, min_row)
}

/// A solver which drives a [Grid] from its initial state to a definitive
/// [Outcome]. It applies a [Strategy] until the fixed point is reached and,
/// if open cells remain, branches on the one with the fewest remaining
/// candidates, which minimizes the branching factor. Each branch snapshots
/// the grid, tentatively assigns a candidate digit in ascending order, and
/// recurses; the first solution found is accepted.
///
/// The recursion depth is bounded by the number of open cells, since every
/// branch fixes at least one cell.
pub struct StrategicBacktrackingSolver<S: Strategy> {
    strategy: S
}

impl<S: Strategy> StrategicBacktrackingSolver<S> {

    /// Creates a new strategic backtracking solver that uses the given
    /// `strategy`.
    pub fn new(strategy: S) -> StrategicBacktrackingSolver<S> {
        StrategicBacktrackingSolver {
            strategy
        }
    }

    fn solve_rec(&self, grid: &mut Grid) -> Result<Grid, Contradiction> {
        while self.strategy.apply(grid)? { }

        if grid.is_complete() {
            return if grid.check() {
                Ok(grid.clone())
            }
            else {
                Err(Contradiction)
            };
        }

        let (column, row) = find_fewest_candidates(grid);
        let candidates = grid.candidates(column, row).unwrap();

        for digit in candidates.iter() {
            let snapshot = grid.snapshot();

            if grid.assign(column, row, digit).unwrap() {
                if let Ok(solved) = self.solve_rec(grid) {
                    return Ok(solved);
                }
            }

            grid.restore(&snapshot);
        }

        Err(Contradiction)
    }

    /// Solves the given grid, consuming it. Inconsistent clues are detected
    /// before propagation starts, so the result is never
    /// [InsufficientInput](Outcome::InsufficientInput).
    pub fn solve(&self, mut grid: Grid) -> Outcome {
        if !grid.check() {
            return Outcome::NoSolution;
        }

        grid.prune();

        match self.solve_rec(&mut grid) {
            Ok(solved) => Outcome::Solved(solved),
            Err(Contradiction) => Outcome::NoSolution
        }
    }
}

impl StrategicBacktrackingSolver<DefaultStrategy> {

    /// Creates a strategic backtracking solver with the [DefaultStrategy].
    pub fn new_default() -> StrategicBacktrackingSolver<DefaultStrategy> {
        StrategicBacktrackingSolver::new(
            CompositeStrategy::new(NakedSingleStrategy, OnlyCellStrategy))
    }
}

/// Attempts to solve the puzzle encoded by the given line. This is a total
/// function: it never fails irrecoverably and always returns one of the
/// three [Outcome] variants. It is also a pure function of its input, so
/// calling it twice on the same line yields the same outcome.
///
/// See [Grid::parse] for the line format.
pub fn solve(line: &str) -> Outcome {
    match Grid::parse(line) {
        Ok(grid) => StrategicBacktrackingSolver::new_default().solve(grid),
        Err(_) => Outcome::InsufficientInput
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const CLASSIC: &str = "000081000002007800053000170370000000600000003000000024069000230005900400000650000";

    #[test]
    fn outcome_accessors() {
        let solved = Outcome::Solved(Grid::parse(CLASSIC).unwrap());

        assert!(solved.is_solved());
        assert!(!Outcome::NoSolution.is_solved());
        assert!(!Outcome::InsufficientInput.is_solved());

        assert_eq!(None, Outcome::NoSolution.digits());
        assert_eq!(None, Outcome::InsufficientInput.digits());
        assert_eq!(Some(8), solved.digits().map(|digits| digits[4]));
    }

    #[test]
    fn short_line_is_insufficient_input() {
        assert_eq!(Outcome::InsufficientInput, solve("123456789"));
        assert_eq!(Outcome::InsufficientInput, solve(""));
    }

    #[test]
    fn invalid_character_is_insufficient_input() {
        let mut line = String::from(CLASSIC);
        line.replace_range(10..11, "x");

        assert_eq!(Outcome::InsufficientInput, solve(&line));
    }

    #[test]
    fn duplicate_givens_in_row_are_unsolvable() {
        let mut line = String::from("550000000");
        line.push_str(&"0".repeat(72));

        assert_eq!(Outcome::NoSolution, solve(&line));
    }

    #[test]
    fn cell_without_candidates_is_unsolvable() {
        // (0, 0) loses 1 to 8 in its row and 9 in its column while every
        // group is still free of duplicates.
        let mut line = String::from("012345678");
        line.push_str(&"0".repeat(27));
        line.push_str("900000000");
        line.push_str(&"0".repeat(36));

        assert_eq!(Outcome::NoSolution, solve(&line));
    }

    #[test]
    fn empty_grid_solves_to_some_valid_completion() {
        let line = "0".repeat(81);
        let outcome = solve(&line);

        if let Outcome::Solved(grid) = outcome {
            assert!(grid.is_complete());
            assert!(grid.check());
            assert!(grid.digits().iter().all(|&digit| digit >= 1 && digit <= 9));
        }
        else {
            panic!("Empty grid has no completion.");
        }
    }

    #[test]
    fn solved_grid_preserves_clues() {
        let outcome = solve(CLASSIC);
        let digits = outcome.digits().expect("classic puzzle is solveable");

        for (position, character) in CLASSIC.chars().enumerate() {
            let given = character as usize - '0' as usize;

            if given > 0 {
                assert_eq!(given, digits[position]);
            }
        }
    }

    #[test]
    fn solving_is_deterministic() {
        assert_eq!(solve(CLASSIC), solve(CLASSIC));

        let empty = "0".repeat(81);

        assert_eq!(solve(&empty), solve(&empty));
    }

    #[test]
    fn solver_accepts_already_complete_grid() {
        let solution = "746281359912537846853496172374125698628749513591368724169874235285913467437652981";
        let outcome = solve(solution);

        assert_eq!(Some(Grid::parse(solution).unwrap()),
            match outcome {
                Outcome::Solved(grid) => Some(grid),
                _ => None
            });
    }

    #[test]
    fn complete_but_invalid_grid_is_unsolvable() {
        // A full grid of ones violates every group.
        assert_eq!(Outcome::NoSolution, solve(&"1".repeat(81)));
    }
}

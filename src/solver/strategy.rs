//! This module is about the propagation phase of solving. Strategies apply
//! logical reasoning to enter digits that are forced by the current state of
//! a [Grid], which shrinks or even eliminates the search space that the
//! backtracking phase has to explore.
//!
//! This module contains the definition of the [Strategy] trait, which all
//! strategies must implement, as well as the two deductions that together
//! drive propagation to its fixed point: [NakedSingleStrategy] and
//! [OnlyCellStrategy]. [CompositeStrategy] combines them.

use crate::{Cell, Grid, SIZE};
use crate::error::Contradiction;
use crate::util::DigitSet;

/// A trait for strategies, which use logical reasoning to enter digits that
/// are forced by the candidate sets of a [Grid].
pub trait Strategy {

    /// Applies this strategy to the given grid once. The strategy may rely
    /// on and modify the grid's candidate sets through [Grid::assign]. It is
    /// applied repeatedly until it finds nothing new, so a single sweep does
    /// not need to chase its own consequences.
    ///
    /// This method shall return `Ok(true)` if and only if something has
    /// changed, that is, a digit has been entered. If the grid state is
    /// discovered to admit no completion, the [Contradiction] is passed on
    /// to the caller, which backtracks or concludes unsolvability.
    fn apply(&self, grid: &mut Grid) -> Result<bool, Contradiction>;
}

/// A [Strategy] which detects naked singles, that is, open cells whose
/// candidate set has exactly one remaining member, and enters that digit.
///
/// An open cell without any remaining candidate is reported as a
/// [Contradiction].
#[derive(Clone)]
pub struct NakedSingleStrategy;

impl Strategy for NakedSingleStrategy {

    fn apply(&self, grid: &mut Grid) -> Result<bool, Contradiction> {
        let mut changed = false;

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Cell::Open(candidates) = grid.cell(column, row).unwrap() {
                    if candidates.is_empty() {
                        return Err(Contradiction);
                    }

                    if candidates.len() == 1 {
                        let digit = candidates.iter().next().unwrap();

                        if !grid.assign(column, row, digit).unwrap() {
                            return Err(Contradiction);
                        }

                        changed = true;
                    }
                }
            }
        }

        Ok(changed)
    }
}

#[derive(Clone)]
enum Location {
    None,
    One(usize, usize),
    Multiple
}

impl Location {
    fn union(&self, column: usize, row: usize) -> Location {
        match self {
            Location::None => Location::One(column, row),
            Location::One(_, _) => Location::Multiple,
            Location::Multiple => Location::Multiple
        }
    }
}

/// A [Strategy] which detects situations in which a digit can only go into
/// one cell of a group, commonly called hidden singles, and enters the digit
/// there. The cell may still have other candidates, which is why
/// [NakedSingleStrategy] cannot find these digits.
///
/// If some group has a digit that is neither fixed in the group nor a
/// candidate of any of its open cells, the grid admits no completion and a
/// [Contradiction] is reported.
#[derive(Clone)]
pub struct OnlyCellStrategy;

impl Strategy for OnlyCellStrategy {

    fn apply(&self, grid: &mut Grid) -> Result<bool, Contradiction> {
        let mut changed = false;

        for group in grid.groups() {
            let mut fixed = DigitSet::empty();
            let mut locations = vec![Location::None; SIZE + 1];

            for &(column, row) in group.iter() {
                match grid.cell(column, row).unwrap() {
                    Cell::Fixed(digit) => {
                        fixed.insert(digit).unwrap();
                    },
                    Cell::Open(candidates) =>
                        for digit in candidates.iter() {
                            let location = &locations[digit];
                            locations[digit] = location.union(column, row);
                        }
                }
            }

            for (digit, location) in locations.into_iter().enumerate().skip(1) {
                if fixed.contains(digit) {
                    continue;
                }

                match location {
                    Location::None => return Err(Contradiction),
                    Location::One(column, row) => {
                        if !grid.assign(column, row, digit).unwrap() {
                            return Err(Contradiction);
                        }

                        changed = true;
                    },
                    Location::Multiple => { }
                }
            }
        }

        Ok(changed)
    }
}

/// A [Strategy] which uses two strategies by first applying one and then the
/// other on the output of the first one. If any child changed the state,
/// this strategy is defined to have changed the state aswell.
pub struct CompositeStrategy<S1: Strategy, S2: Strategy> {
    s1: S1,
    s2: S2
}

impl<S1: Strategy, S2: Strategy> CompositeStrategy<S1, S2> {

    /// Creates a new composite strategy from the two children strategies.
    ///
    /// # Arguments
    ///
    /// * `s1`: The strategy which is applied first.
    /// * `s2`: The strategy which is applied second.
    pub fn new(s1: S1, s2: S2) -> CompositeStrategy<S1, S2> {
        CompositeStrategy {
            s1,
            s2
        }
    }
}

impl<S1: Strategy, S2: Strategy> Strategy for CompositeStrategy<S1, S2> {
    fn apply(&self, grid: &mut Grid) -> Result<bool, Contradiction> {
        Ok(self.s1.apply(grid)? | self.s2.apply(grid)?)
    }
}

impl<S1: Strategy + Clone, S2: Strategy + Clone> Clone
        for CompositeStrategy<S1, S2> {
    fn clone(&self) -> Self {
        CompositeStrategy::new(self.s1.clone(), self.s2.clone())
    }
}

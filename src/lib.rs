// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a checker that determines, for batches of classic
//! 9x9 Sudoku puzzles, whether a valid completion exists. It supports the
//! following key features:
//!
//! * Parsing puzzle lines of 81 digit characters into a [Grid]
//! * Solving grids using constraint propagation (naked and hidden singles)
//! interleaved with a minimum-remaining-values backtracking search
//! * Classifying every line as solved, unsolvable, or malformed
//! * Checking entire line sources and tallying the results
//!
//! # Parsing puzzle lines
//!
//! See [Grid::parse] for the exact format of a puzzle line.
//!
//! ```
//! use sudoku_batch::{Cell, Grid};
//!
//! let grid = Grid::parse("000081000002007800053000170370000000600000003000000024069000230005900400000650000").unwrap();
//!
//! assert_eq!(Ok(Cell::Fixed(8)), grid.cell(4, 0));
//! assert_eq!(24, grid.count_fixed());
//! println!("{}", grid);
//! ```
//!
//! # Solving
//!
//! The [solve](solver::solve) function drives a grid from its initial state
//! to one of three definitive outcomes. It never fails irrecoverably.
//!
//! ```
//! use sudoku_batch::solver::{solve, Outcome};
//!
//! let outcome = solve("000081000002007800053000170370000000600000003000000024069000230005900400000650000");
//!
//! assert!(outcome.is_solved());
//!
//! if let Outcome::Solved(grid) = outcome {
//!     assert!(grid.is_complete());
//!     assert!(grid.check());
//! }
//! ```
//!
//! # Checking batches
//!
//! The [batch] module consumes any buffered line source and tallies how many
//! puzzles were solved, proved unsolvable, or rejected as malformed.
//!
//! ```
//! use std::io::Cursor;
//! use sudoku_batch::batch;
//!
//! let lines = "550000000000000000000000000000000000000000000000000000000000000000000000000000000\n123\n";
//! let report = batch::check_lines(Cursor::new(lines)).unwrap();
//!
//! assert_eq!(0, report.solved);
//! assert_eq!(1, report.no_solution);
//! assert_eq!(1, report.rejected);
//! ```
//!
//! # Note regarding performance
//!
//! Solving is dominated by the backtracking search on hard puzzles. It is
//! strongly recommended to use at least `opt-level = 2`, even in tests that
//! solve more than a handful of grids.

pub mod batch;
pub mod error;
pub mod solver;
pub mod util;


use crate::error::{GridError, GridResult, ParseError, ParseResult};
use crate::util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a grid, as well as the number of cells
/// in each constraint group.
pub const SIZE: usize = 9;

/// The number of rows and columns of a single block, i.e. the square root of
/// [SIZE].
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in a grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// One of the 81 positions of a [Grid]. A cell either holds a digit that is
/// known, because it was given as a clue or deduced during solving, or it is
/// still undecided and tracks the set of digits not yet excluded by the
/// constraints.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {

    /// A cell whose digit (1 to 9) is known.
    Fixed(usize),

    /// An undecided cell together with its remaining candidate digits.
    Open(DigitSet)
}

/// A list of the coordinates of all cells in one constraint group, in the
/// form `(column, row)`. Each of the 27 groups of a grid (9 rows, 9 columns
/// and 9 blocks) must contain every digit from 1 to 9 exactly once.
pub type Group = Vec<(usize, usize)>;

/// A 9x9 Sudoku board. Each of its 81 cells is either [Fixed](Cell::Fixed)
/// or [Open](Cell::Open) with a candidate set, and the cells are organized
/// into 27 constraint groups: 9 rows, 9 columns, and 9 non-overlapping 3x3
/// blocks.
///
/// A grid is constructed once per puzzle line with [Grid::parse], mutated in
/// place while solving, and discarded after the outcome is extracted. All
/// mutation goes through [Grid::assign] and [Grid::prune], which either
/// preserve the consistency invariant (no digit fixed twice in a group, no
/// open candidate that collides with a fixed digit in the same group) or
/// report a contradiction to the caller.
///
/// `Grid` serializes to and from the same 81-character line code that
/// [Grid::parse] accepts, with '0' marking open cells.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct Grid {
    cells: Vec<Cell>
}

fn to_char(cell: Cell) -> char {
    match cell {
        Cell::Fixed(digit) => (b'0' + digit as u8) as char,
        Cell::Open(_) => ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[index(x, y)]), ' ', '║', true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line().as_str())?;
            }
            else {
                f.write_str(thin_separator_line().as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())
    }
}

impl Grid {

    /// Parses a puzzle line into a grid. The first 81 meaningful characters
    /// of the line are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. The digits '1' to '9'
    /// denote given clues, while '0' and '.' denote blank cells. Whitespace
    /// is ignored to allow for more intuitive formatting, and anything after
    /// the 81st meaningful character is not considered.
    ///
    /// Given cells start out [Fixed](Cell::Fixed) with their clue digit and
    /// blank cells start out [Open](Cell::Open) with all nine candidates.
    /// Call [Grid::prune] to restrict the candidate sets to the digits not
    /// excluded by the clues.
    ///
    /// # Errors
    ///
    /// * `ParseError::TooShort` if the line ends before 81 meaningful
    /// characters were found.
    /// * `ParseError::InvalidCharacter` if the line contains a character
    /// that is neither a digit, nor a blank marker, nor whitespace.
    pub fn parse(raw: &str) -> ParseResult<Grid> {
        let mut cells = Vec::with_capacity(CELL_COUNT);

        for character in raw.chars() {
            if cells.len() == CELL_COUNT {
                break;
            }

            match character {
                '1'..='9' =>
                    cells.push(Cell::Fixed(character as usize - '0' as usize)),
                '0' | '.' => cells.push(Cell::Open(DigitSet::full())),
                _ if character.is_whitespace() => continue,
                _ => return Err(ParseError::InvalidCharacter)
            }
        }

        if cells.len() < CELL_COUNT {
            return Err(ParseError::TooShort);
        }

        Ok(Grid {
            cells
        })
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn cell(&self, column: usize, row: usize) -> GridResult<Cell> {
        if column >= SIZE || row >= SIZE {
            Err(GridError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Gets the set of digits that can currently be entered into the cell at
    /// the specified position. For an [Open](Cell::Open) cell this is its
    /// candidate set, for a [Fixed](Cell::Fixed) cell it is the singleton
    /// set of its digit.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are greater than or equal to 9. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn candidates(&self, column: usize, row: usize)
            -> GridResult<DigitSet> {
        match self.cell(column, row)? {
            Cell::Fixed(digit) => Ok(DigitSet::singleton(digit).unwrap()),
            Cell::Open(candidates) => Ok(candidates)
        }
    }

    fn fixed_in_groups(&self, column: usize, row: usize) -> DigitSet {
        let mut seen = DigitSet::empty();

        for other_column in 0..SIZE {
            if let Cell::Fixed(digit) = self.cells[index(other_column, row)] {
                seen.insert(digit).unwrap();
            }
        }

        for other_row in 0..SIZE {
            if let Cell::Fixed(digit) = self.cells[index(column, other_row)] {
                seen.insert(digit).unwrap();
            }
        }

        let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
        let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

        for other_row in block_row..(block_row + BLOCK_SIZE) {
            for other_column in block_column..(block_column + BLOCK_SIZE) {
                if let Cell::Fixed(digit) =
                        self.cells[index(other_column, other_row)] {
                    seen.insert(digit).unwrap();
                }
            }
        }

        seen
    }

    /// Recomputes the candidate set of every open cell from the fixed digits
    /// in its row, column, and block. This establishes the consistency
    /// invariant for a freshly parsed grid and is run once before
    /// propagation starts; afterwards [Grid::assign] maintains the candidate
    /// sets incrementally.
    pub fn prune(&mut self) {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Cell::Open(_) = self.cells[index(column, row)] {
                    let mut candidates = DigitSet::full();

                    for digit in self.fixed_in_groups(column, row).iter() {
                        candidates.remove(digit).unwrap();
                    }

                    self.cells[index(column, row)] = Cell::Open(candidates);
                }
            }
        }
    }

    fn eliminate(&mut self, column: usize, row: usize, digit: usize) -> bool {
        match self.cells[index(column, row)] {
            Cell::Fixed(existing) => existing != digit,
            Cell::Open(ref mut candidates) => {
                candidates.remove(digit).unwrap();
                !candidates.is_empty()
            }
        }
    }

    /// Fixes the cell at the specified position to the given digit and
    /// removes the digit from the candidate sets of every other cell sharing
    /// a row, column, or block with it.
    ///
    /// The returned flag is `true` if the grid is still consistent and
    /// `false` if the assignment is provably invalid given prior deductions.
    /// The latter is the case if the digit was already excluded from the
    /// cell's own candidates, if the cell is fixed to a different digit, or
    /// if the candidate set of an open sibling cell became empty. Assigning
    /// the digit a cell is already fixed to reports consistency and changes
    /// nothing.
    ///
    /// Contradictions are ordinary return values to be handled by the
    /// caller; this method never panics.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` if either `column` or `row` are greater
    /// than or equal to 9.
    /// * `GridError::InvalidDigit` if `digit` is less than 1 or greater
    /// than 9.
    pub fn assign(&mut self, column: usize, row: usize, digit: usize)
            -> GridResult<bool> {
        if column >= SIZE || row >= SIZE {
            return Err(GridError::OutOfBounds);
        }

        if digit < 1 || digit > SIZE {
            return Err(GridError::InvalidDigit);
        }

        match self.cells[index(column, row)] {
            Cell::Fixed(existing) => return Ok(existing == digit),
            Cell::Open(candidates) =>
                if !candidates.contains(digit) {
                    return Ok(false);
                }
        }

        self.cells[index(column, row)] = Cell::Fixed(digit);

        for other_column in 0..SIZE {
            if other_column != column &&
                    !self.eliminate(other_column, row, digit) {
                return Ok(false);
            }
        }

        for other_row in 0..SIZE {
            if other_row != row && !self.eliminate(column, other_row, digit) {
                return Ok(false);
            }
        }

        let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
        let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

        for other_row in block_row..(block_row + BLOCK_SIZE) {
            for other_column in block_column..(block_column + BLOCK_SIZE) {
                if other_row != row && other_column != column &&
                        !self.eliminate(other_column, other_row, digit) {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Indicates whether this grid is complete, i.e. every cell is
    /// [Fixed](Cell::Fixed).
    pub fn is_complete(&self) -> bool {
        !self.cells.iter().any(|cell| matches!(cell, Cell::Open(_)))
    }

    /// Counts the number of [Fixed](Cell::Fixed) cells in this grid. For a
    /// freshly parsed grid, this is the number of given clues.
    pub fn count_fixed(&self) -> usize {
        self.cells.iter()
            .filter(|cell| matches!(cell, Cell::Fixed(_)))
            .count()
    }

    /// Gets the coordinates of all cells of each of the 27 constraint groups
    /// of the grid: first the 9 rows, then the 9 columns, then the 9 blocks.
    pub fn groups(&self) -> Vec<Group> {
        let mut groups = Vec::with_capacity(3 * SIZE);

        for row in 0..SIZE {
            let mut group = Group::new();

            for column in 0..SIZE {
                group.push((column, row));
            }

            groups.push(group);
        }

        for column in 0..SIZE {
            let mut group = Group::new();

            for row in 0..SIZE {
                group.push((column, row));
            }

            groups.push(group);
        }

        for block_row in 0..BLOCK_SIZE {
            let base_row = block_row * BLOCK_SIZE;

            for block_column in 0..BLOCK_SIZE {
                let base_column = block_column * BLOCK_SIZE;
                let mut group = Group::new();

                for sub_row in 0..BLOCK_SIZE {
                    let row = base_row + sub_row;

                    for sub_column in 0..BLOCK_SIZE {
                        let column = base_column + sub_column;
                        group.push((column, row));
                    }
                }

                groups.push(group);
            }
        }

        groups
    }

    /// Indicates whether the fixed digits of this grid are consistent, that
    /// is, no digit appears more than once in any row, column, or block.
    /// Open cells and their candidates are not considered.
    pub fn check(&self) -> bool {
        for group in self.groups() {
            let mut seen = DigitSet::empty();

            for &(column, row) in group.iter() {
                if let Cell::Fixed(digit) = self.cells[index(column, row)] {
                    if !seen.insert(digit).unwrap() {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Creates a copy of the full grid state to return to later with
    /// [Grid::restore]. The grid is small and fixed-size, so a value copy is
    /// the undo mechanism used by the backtracking search.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Resets this grid to the state of a snapshot previously taken with
    /// [Grid::snapshot].
    pub fn restore(&mut self, snapshot: &Grid) {
        self.cells.copy_from_slice(&snapshot.cells);
    }

    /// Gets the digits of all 81 cells in left-to-right, top-to-bottom
    /// order, with 0 standing for cells that are still open.
    pub fn digits(&self) -> Vec<usize> {
        self.cells.iter()
            .map(|cell| match cell {
                Cell::Fixed(digit) => *digit,
                Cell::Open(_) => 0
            })
            .collect()
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. Open cells are encoded as '0'. A grid that is
    /// converted to a line and parsed again will contain the same fixed
    /// digits.
    pub fn to_line(&self) -> String {
        self.digits().iter()
            .map(|&digit| (b'0' + digit as u8) as char)
            .collect()
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> String {
        grid.to_line()
    }
}

impl TryFrom<String> for Grid {
    type Error = ParseError;

    fn try_from(code: String) -> ParseResult<Grid> {
        Grid::parse(&code)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const CLASSIC: &str = "000081000002007800053000170370000000600000003000000024069000230005900400000650000";

    #[test]
    fn parse_ok() {
        let grid = Grid::parse(CLASSIC).unwrap();

        assert_eq!(Cell::Fixed(8), grid.cell(4, 0).unwrap());
        assert_eq!(Cell::Fixed(1), grid.cell(5, 0).unwrap());
        assert_eq!(Cell::Fixed(2), grid.cell(2, 1).unwrap());
        assert_eq!(Cell::Open(DigitSet::full()), grid.cell(0, 0).unwrap());
        assert_eq!(Cell::Fixed(6), grid.cell(0, 4).unwrap());
        assert_eq!(24, grid.count_fixed());
    }

    #[test]
    fn parse_accepts_dots_as_blanks() {
        let dotted: String = CLASSIC.chars()
            .map(|c| if c == '0' { '.' } else { c })
            .collect();

        assert_eq!(Grid::parse(CLASSIC), Grid::parse(&dotted));
    }

    #[test]
    fn parse_skips_whitespace() {
        let spaced: String = CLASSIC.chars()
            .enumerate()
            .flat_map(|(i, c)| {
                let space = if i % 9 == 0 { Some(' ') } else { None };
                space.into_iter().chain(std::iter::once(c))
            })
            .collect();

        assert_eq!(Grid::parse(CLASSIC), Grid::parse(&spaced));
    }

    #[test]
    fn parse_too_short() {
        assert_eq!(Err(ParseError::TooShort), Grid::parse("123456789"));
        assert_eq!(Err(ParseError::TooShort), Grid::parse(""));
        assert_eq!(Err(ParseError::TooShort), Grid::parse(&CLASSIC[..80]));
    }

    #[test]
    fn parse_invalid_character() {
        let mut broken = String::from(CLASSIC);
        broken.replace_range(40..41, "x");

        assert_eq!(Err(ParseError::InvalidCharacter), Grid::parse(&broken));
    }

    #[test]
    fn parse_ignores_characters_past_81_cells() {
        let mut extended = String::from(CLASSIC);
        extended.push_str("#!?");

        assert_eq!(Grid::parse(CLASSIC), Grid::parse(&extended));
    }

    #[test]
    fn cell_out_of_bounds() {
        let grid = Grid::parse(CLASSIC).unwrap();

        assert_eq!(Err(GridError::OutOfBounds), grid.cell(9, 0));
        assert_eq!(Err(GridError::OutOfBounds), grid.cell(0, 9));
        assert_eq!(Err(GridError::OutOfBounds), grid.candidates(9, 9));
    }

    #[test]
    fn candidates_of_fixed_cell_are_singleton() {
        let grid = Grid::parse(CLASSIC).unwrap();
        let candidates = grid.candidates(4, 0).unwrap();

        assert_eq!(1, candidates.len());
        assert!(candidates.contains(8));
    }

    #[test]
    fn prune_restricts_open_cells() {
        let mut grid = Grid::parse(CLASSIC).unwrap();
        grid.prune();

        // (0, 0) shares a row with 8 and 1, a column with 3 and 6, and a
        // block with 2 and 5.
        let candidates = grid.candidates(0, 0).unwrap();

        assert!(!candidates.contains(8));
        assert!(!candidates.contains(1));
        assert!(!candidates.contains(3));
        assert!(!candidates.contains(6));
        assert!(!candidates.contains(2));
        assert!(!candidates.contains(5));
        assert!(candidates.contains(4));
        assert!(candidates.contains(7));
        assert!(candidates.contains(9));
    }

    #[test]
    fn assign_eliminates_from_row_column_and_block() {
        let mut grid = Grid::parse(&"0".repeat(81)).unwrap();
        grid.prune();

        assert_eq!(Ok(true), grid.assign(0, 0, 5));
        assert_eq!(Cell::Fixed(5), grid.cell(0, 0).unwrap());
        assert!(!grid.candidates(8, 0).unwrap().contains(5));
        assert!(!grid.candidates(0, 8).unwrap().contains(5));
        assert!(!grid.candidates(2, 2).unwrap().contains(5));
        assert!(grid.candidates(8, 8).unwrap().contains(5));
    }

    #[test]
    fn assign_rejects_excluded_digit() {
        let mut line = String::from("120000000");
        line.push_str(&"0".repeat(72));
        let mut grid = Grid::parse(&line).unwrap();
        grid.prune();

        assert_eq!(Ok(false), grid.assign(2, 0, 1));
    }

    #[test]
    fn assign_on_fixed_cell() {
        let mut line = String::from("5");
        line.push_str(&"0".repeat(80));
        let mut grid = Grid::parse(&line).unwrap();
        grid.prune();

        assert_eq!(Ok(true), grid.assign(0, 0, 5));
        assert_eq!(Ok(false), grid.assign(0, 0, 6));
    }

    #[test]
    fn assign_detects_emptied_sibling() {
        let mut line = String::from("023456780");
        line.push_str(&"0".repeat(72));
        let mut grid = Grid::parse(&line).unwrap();
        grid.prune();

        // (8, 0) can only be 1 or 9. Fixing 9 in its column and then 1 in
        // its block leaves it without any candidate.
        assert_eq!(Ok(true), grid.assign(8, 4, 9));
        assert_eq!(1, grid.candidates(8, 0).unwrap().len());
        assert_eq!(Ok(false), grid.assign(7, 1, 1));
    }

    #[test]
    fn assign_invalid_arguments() {
        let mut grid = Grid::parse(CLASSIC).unwrap();

        assert_eq!(Err(GridError::OutOfBounds), grid.assign(9, 0, 1));
        assert_eq!(Err(GridError::InvalidDigit), grid.assign(0, 0, 0));
        assert_eq!(Err(GridError::InvalidDigit), grid.assign(0, 0, 10));
    }

    #[test]
    fn snapshot_and_restore() {
        let mut grid = Grid::parse(CLASSIC).unwrap();
        grid.prune();
        let snapshot = grid.snapshot();

        assert_eq!(Ok(true), grid.assign(0, 0, 4));
        assert_ne!(snapshot, grid);

        grid.restore(&snapshot);

        assert_eq!(snapshot, grid);
    }

    #[test]
    fn check_accepts_consistent_grid() {
        assert!(Grid::parse(CLASSIC).unwrap().check());
        assert!(Grid::parse(&"0".repeat(81)).unwrap().check());
    }

    #[test]
    fn check_detects_row_duplicate() {
        let mut line = String::from("550000000");
        line.push_str(&"0".repeat(72));

        assert!(!Grid::parse(&line).unwrap().check());
    }

    #[test]
    fn check_detects_column_duplicate() {
        let mut line = String::from("700000000");
        line.push_str(&"0".repeat(27));
        line.push('7');
        line.push_str(&"0".repeat(44));
        let grid = Grid::parse(&line).unwrap();

        assert_eq!(Cell::Fixed(7), grid.cell(0, 0).unwrap());
        assert_eq!(Cell::Fixed(7), grid.cell(0, 4).unwrap());
        assert!(!grid.check());
    }

    #[test]
    fn check_detects_block_duplicate() {
        let mut line = String::from("300000000");
        line.push_str("010000000");
        line.push_str("003000000");
        line.push_str(&"0".repeat(54));
        let grid = Grid::parse(&line).unwrap();

        assert_eq!(Cell::Fixed(3), grid.cell(0, 0).unwrap());
        assert_eq!(Cell::Fixed(3), grid.cell(2, 2).unwrap());
        assert!(!grid.check());
    }

    #[test]
    fn groups_cover_every_cell_three_times() {
        let grid = Grid::parse(CLASSIC).unwrap();
        let groups = grid.groups();

        assert_eq!(27, groups.len());

        let mut containments = vec![0usize; CELL_COUNT];

        for group in groups {
            assert_eq!(SIZE, group.len());

            for (column, row) in group {
                containments[index(column, row)] += 1;
            }
        }

        assert!(containments.iter().all(|&count| count == 3));
    }

    #[test]
    fn digits_and_line_round_trip() {
        let grid = Grid::parse(CLASSIC).unwrap();
        let digits = grid.digits();

        assert_eq!(CELL_COUNT, digits.len());
        assert_eq!(8, digits[4]);
        assert_eq!(0, digits[0]);
        assert_eq!(CLASSIC, grid.to_line().as_str());
        assert_eq!(grid, Grid::parse(&grid.to_line()).unwrap());
    }

    #[test]
    fn serde_round_trip() {
        let grid = Grid::parse(CLASSIC).unwrap();
        let json = serde_json::to_string(&grid).unwrap();

        assert_eq!(format!("\"{}\"", CLASSIC), json);
        assert_eq!(grid, serde_json::from_str::<Grid>(&json).unwrap());
    }

    #[test]
    fn serde_rejects_malformed_line() {
        assert!(serde_json::from_str::<Grid>("\"123\"").is_err());
    }
}

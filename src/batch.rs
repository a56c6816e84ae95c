//! This module contains the checking of entire puzzle line sources. It wraps
//! the solving of single lines from [crate::solver] with a loop over a
//! buffered reader and a [BatchReport] tallying the results.

use crate::solver::{self, Outcome};

use log::{debug, warn};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead};

/// The tallied results of checking a source of puzzle lines. The report
/// implements `Display` for a one-line human-readable summary and serde
/// serialization for machine-readable output.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct BatchReport {

    /// The number of lines whose puzzle was completed successfully.
    pub solved: usize,

    /// The number of lines whose puzzle was proved to admit no valid
    /// completion.
    pub no_solution: usize,

    /// The number of lines that were rejected because they do not encode a
    /// full 81-cell grid.
    pub rejected: usize
}

impl BatchReport {

    /// Gets the total number of checked lines, i.e. the sum of all three
    /// counters.
    pub fn total(&self) -> usize {
        self.solved + self.no_solution + self.rejected
    }
}

impl Display for BatchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} puzzles solved ({} unsolvable, {} rejected)",
            self.solved, self.total(), self.no_solution, self.rejected)
    }
}

/// Checks every line of the given reader, one puzzle per line, and tallies
/// the outcomes into a [BatchReport]. Blank lines are skipped without being
/// counted. Every puzzle is solved independently, so a malformed or
/// unsolvable line never stops the batch.
///
/// Per-line results are logged: solved grids at debug level, failures at
/// warn level.
///
/// # Errors
///
/// Any I/O error raised by the underlying reader is passed through.
pub fn check_lines<R: BufRead>(reader: R) -> io::Result<BatchReport> {
    let mut report = BatchReport::default();

    for line in reader.lines() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        match solver::solve(&line) {
            Outcome::Solved(grid) => {
                report.solved += 1;
                debug!("solved puzzle\n{}", grid);
            },
            Outcome::NoSolution => {
                report.no_solution += 1;
                warn!("no valid completion: {}", line);
            },
            Outcome::InsufficientInput => {
                report.rejected += 1;
                warn!("rejected malformed line: {}", line);
            }
        }
    }

    Ok(report)
}

//! The 4x12 grid read off the device and its column-sum check.

use std::fmt;

use smallvec::SmallVec;

use crate::device::{ROWS, SLOTS};
use crate::error::{ComputerError, Result};

/// Column total every column must reach for the puzzle to be solved
pub const TARGET_TOTAL: u32 = 42;

/// Placeholder printed for a cell no layer fills
const EMPTY_CELL: &str = "--";

/// Values visible through the device at one rotation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    numbers: [[Option<u32>; SLOTS]; ROWS],
    positions: SmallVec<[i32; 5]>,
}

impl Grid {
    pub fn new(numbers: [[Option<u32>; SLOTS]; ROWS], positions: SmallVec<[i32; 5]>) -> Self {
        Self { numbers, positions }
    }

    /// Rotation offsets that produced this grid
    pub fn positions(&self) -> &[i32] {
        &self.positions
    }

    pub fn rows(&self) -> &[[Option<u32>; SLOTS]; ROWS] {
        &self.numbers
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.numbers.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Sum each column over all four rows.
    ///
    /// Fails with `UndefinedCellSum` on the first empty cell; an empty cell
    /// is never counted as zero.
    pub fn column_totals(&self) -> Result<[u32; SLOTS]> {
        let mut totals = [0; SLOTS];
        for (col, total) in totals.iter_mut().enumerate() {
            for (row, cells) in self.numbers.iter().enumerate() {
                *total += cells[col].ok_or(ComputerError::UndefinedCellSum { row, col })?;
            }
        }
        Ok(totals)
    }

    /// True when every column sums to `target`
    pub fn verify(&self, target: u32) -> Result<bool> {
        Ok(self.column_totals()?.iter().all(|&total| total == target))
    }
}

fn write_cells<I>(f: &mut fmt::Formatter<'_>, cells: I) -> fmt::Result
where
    I: IntoIterator<Item = Option<u32>>,
{
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        match cell {
            Some(value) => write!(f, "{:>2}", value)?,
            None => write!(f, "{:>2}", EMPTY_CELL)?,
        }
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Positions: {:?}", self.positions())?;
        for row in &self.numbers {
            write_cells(f, row.iter().copied())?;
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(35))?;
        match self.column_totals() {
            Ok(totals) => write_cells(f, totals.iter().copied().map(Some)),
            Err(e) => write!(f, "{}", e),
        }
    }
}

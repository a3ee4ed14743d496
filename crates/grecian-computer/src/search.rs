//! Exhaustive rotation search.
//!
//! Every combination of offsets 0..12 for the rotating layers is visited in
//! lexicographic order (layer 0 most significant). The search stops at the
//! first grid whose columns all reach the target total.

use std::time::Instant;

use smallvec::{smallvec, SmallVec};
use tracing::{debug, info, warn};

use crate::device::{GrecianComputer, SLOTS};
use crate::error::{ComputerError, Result};
use crate::grid::{Grid, TARGET_TOTAL};

/// Offsets for the rotating layers, layer 0 first
pub type Offsets = SmallVec<[i32; 5]>;

/// Configuration for the search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Total every column must reach
    pub target: u32,
    /// Number of leading layers to rotate; the rest stay at offset 0
    pub rotating_layers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target: TARGET_TOTAL,
            rotating_layers: 4,
        }
    }
}

impl SearchConfig {
    /// Number of candidates in the full search space (saturates at `usize::MAX`)
    pub fn search_space(&self) -> usize {
        u32::try_from(self.rotating_layers)
            .ok()
            .and_then(|exp| SLOTS.checked_pow(exp))
            .unwrap_or(usize::MAX)
    }
}

/// One evaluated rotation state
#[derive(Debug, Clone)]
pub struct Candidate {
    pub offsets: Offsets,
    pub grid: Grid,
    /// Outcome of the column check; an empty cell is kept here as an error
    pub verdict: Result<bool>,
}

impl Candidate {
    pub fn verified(&self) -> bool {
        matches!(self.verdict, Ok(true))
    }
}

/// How the search ended
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found { offsets: Offsets, grid: Grid },
    Exhausted,
}

/// Result of a full search run
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Number of candidates evaluated, including the accepted one
    pub candidates_tested: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl SearchReport {
    pub fn solved(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found { .. })
    }

    pub fn search_exhausted(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Exhausted)
    }
}

/// Counts through every offset combination, last layer fastest
#[derive(Debug, Clone)]
struct Odometer {
    digits: Option<Offsets>,
}

impl Odometer {
    fn new(width: usize) -> Self {
        Self {
            digits: Some(smallvec![0; width]),
        }
    }
}

impl Iterator for Odometer {
    type Item = Offsets;

    fn next(&mut self) -> Option<Offsets> {
        let current = self.digits.take()?;
        let mut next = current.clone();
        for digit in next.iter_mut().rev() {
            *digit += 1;
            if *digit < SLOTS as i32 {
                self.digits = Some(next);
                return Some(current);
            }
            *digit = 0;
        }
        // Carried out of the most significant digit
        Some(current)
    }
}

/// Lazy stream of evaluated candidates over one device
pub struct Candidates<'a> {
    computer: &'a mut GrecianComputer,
    odometer: Odometer,
    target: u32,
}

impl Candidates<'_> {
    fn evaluate(&mut self, offsets: Offsets) -> Result<Candidate> {
        for (layer, &position) in offsets.iter().enumerate() {
            self.computer.rotate(layer, position)?;
        }
        let grid = self.computer.compute_grid();
        let verdict = grid.verify(self.target);
        Ok(Candidate {
            offsets,
            grid,
            verdict,
        })
    }
}

impl Iterator for Candidates<'_> {
    type Item = Result<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        let offsets = self.odometer.next()?;
        Some(self.evaluate(offsets))
    }
}

/// Stream every candidate of the search space without stopping early
pub fn candidates<'a>(
    computer: &'a mut GrecianComputer,
    config: &SearchConfig,
) -> Candidates<'a> {
    Candidates {
        computer,
        odometer: Odometer::new(config.rotating_layers),
        target: config.target,
    }
}

/// Search for the first rotation state whose columns all reach the target.
///
/// `observe` sees every candidate in visiting order, including the accepted
/// one, and the candidate with an empty cell before the search fails on it.
/// An empty cell or a bad layer count ends the search with an error.
pub fn find_alignment<F>(
    computer: &mut GrecianComputer,
    config: &SearchConfig,
    mut observe: F,
) -> Result<SearchReport>
where
    F: FnMut(&Candidate),
{
    let start_time = Instant::now();
    let layer_count = computer.layer_count();
    if config.rotating_layers > layer_count {
        return Err(ComputerError::InvalidLayerIndex {
            index: config.rotating_layers - 1,
            layer_count,
        });
    }

    info!(
        target_total = config.target,
        rotating_layers = config.rotating_layers,
        search_space = config.search_space(),
        "starting rotation search"
    );

    let mut candidates_tested: usize = 0;

    for candidate in candidates(computer, config) {
        let candidate = candidate?;
        candidates_tested += 1;
        observe(&candidate);

        if candidate.verdict? {
            info!(
                offsets = ?candidate.offsets.as_slice(),
                candidates_tested,
                "alignment found"
            );
            return Ok(SearchReport {
                outcome: SearchOutcome::Found {
                    offsets: candidate.offsets,
                    grid: candidate.grid,
                },
                candidates_tested,
                time_elapsed_ms: start_time.elapsed().as_millis() as u64,
            });
        }
        debug!(offsets = ?candidate.offsets.as_slice(), "candidate rejected");
    }

    warn!(candidates_tested, "search space exhausted without a solution");
    Ok(SearchReport {
        outcome: SearchOutcome::Exhausted,
        candidates_tested,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    })
}

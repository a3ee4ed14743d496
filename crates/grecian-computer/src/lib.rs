//! Rotation search for the Grecian Computer disc puzzle.
//!
//! The device stacks five discs of numbered rings. This crate models the
//! lookup through the stack and brute-forces the disc rotations until every
//! one of the twelve columns sums to 42.

pub mod dataset;
pub mod device;
pub mod error;
pub mod grid;
pub mod search;

// Re-export main types
pub use dataset::grecian_layers;
pub use device::{GrecianComputer, Layer, Ring, ROWS, SLOTS};
pub use error::{ComputerError, Result};
pub use grid::{Grid, TARGET_TOTAL};
pub use search::{
    candidates, find_alignment, Candidate, Candidates, Offsets, SearchConfig, SearchOutcome,
    SearchReport,
};

//! The five discs of the physical puzzle, top disc first.
//!
//! Empty slots (cut-outs in the disc) are written as 0.

use crate::device::{Layer, Ring};

const TOP: [[u32; 12]; 1] = [[3, 0, 6, 0, 10, 0, 7, 0, 15, 0, 8, 0]];

const SECOND: [[u32; 12]; 2] = [
    [7, 3, 0, 6, 0, 11, 11, 6, 11, 0, 6, 17],
    [4, 0, 7, 15, 0, 0, 14, 0, 9, 0, 12, 0],
];

const THIRD: [[u32; 12]; 3] = [
    [9, 13, 9, 7, 13, 21, 17, 4, 5, 0, 7, 8],
    [21, 6, 15, 4, 9, 18, 11, 26, 14, 1, 12, 0],
    [5, 0, 10, 0, 8, 0, 22, 0, 16, 0, 9, 0],
];

const FOURTH: [[u32; 12]; 4] = [
    [7, 0, 9, 0, 7, 14, 11, 0, 8, 0, 16, 2],
    [9, 20, 12, 3, 6, 0, 14, 12, 3, 8, 9, 0],
    [3, 26, 6, 0, 2, 13, 9, 0, 17, 19, 3, 12],
    [1, 0, 9, 0, 12, 0, 6, 0, 10, 0, 10, 0],
];

// Base disc: fully printed, never rotated
const BASE: [[u32; 12]; 4] = [
    [14, 11, 14, 14, 11, 14, 11, 14, 11, 11, 14, 11],
    [8, 9, 10, 11, 12, 13, 14, 15, 4, 5, 6, 7],
    [3, 3, 14, 14, 21, 21, 9, 9, 4, 4, 6, 6],
    [2, 5, 10, 7, 16, 8, 7, 8, 8, 3, 4, 12],
];

fn layer(rings: &[[u32; 12]]) -> Layer {
    Layer::new(rings.iter().copied().map(Ring::from_values))
}

/// Layers of the puzzle in lookup order
pub fn grecian_layers() -> Vec<Layer> {
    vec![
        layer(&TOP),
        layer(&SECOND),
        layer(&THIRD),
        layer(&FOURTH),
        layer(&BASE),
    ]
}

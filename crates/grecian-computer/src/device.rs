//! Device model: stacked rotating discs and the value lookup through them.
//!
//! Each layer is a disc carrying one or more concentric rings of twelve
//! slots. Looking down through the stack at a (row, column) address shows
//! the first filled slot among the layers deep enough to reach that row.

use smallvec::SmallVec;

use crate::error::{ComputerError, Result};
use crate::grid::Grid;

/// Radial positions per ring
pub const SLOTS: usize = 12;

/// Ring depths visible through the device
pub const ROWS: usize = 4;

/// One circular row of twelve slots on a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    slots: [Option<u32>; SLOTS],
}

impl Ring {
    pub fn new(slots: [Option<u32>; SLOTS]) -> Self {
        Self { slots }
    }

    /// Build a ring from raw values, where 0 marks an empty slot
    pub fn from_values(values: [u32; SLOTS]) -> Self {
        Self {
            slots: values.map(|v| if v == 0 { None } else { Some(v) }),
        }
    }

    /// Value in a slot (slot index wraps around the ring)
    pub fn get(&self, slot: usize) -> Option<u32> {
        self.slots[slot % SLOTS]
    }
}

/// A disc of the device, outermost ring first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    rings: SmallVec<[Ring; ROWS]>,
}

impl Layer {
    pub fn new(rings: impl IntoIterator<Item = Ring>) -> Self {
        Self {
            rings: rings.into_iter().collect(),
        }
    }

    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// The ring at a given depth, if this layer reaches that deep
    pub fn ring(&self, row: usize) -> Option<&Ring> {
        self.rings.get(row)
    }
}

/// The stacked disc device with a rotation offset per layer
#[derive(Debug, Clone)]
pub struct GrecianComputer {
    layers: Vec<Layer>,
    positions: SmallVec<[i32; 5]>,
}

impl GrecianComputer {
    /// Create a device with every layer at offset 0
    pub fn new(layers: Vec<Layer>) -> Self {
        let positions = SmallVec::from_elem(0, layers.len());
        Self { layers, positions }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Current rotation offsets, one per layer (stored as set, not reduced)
    pub fn positions(&self) -> &[i32] {
        &self.positions
    }

    /// Set the rotation offset of a layer.
    ///
    /// Any integer is accepted; the offset is reduced modulo 12 on lookup.
    pub fn rotate(&mut self, layer: usize, position: i32) -> Result<()> {
        let layer_count = self.layers.len();
        let slot = self
            .positions
            .get_mut(layer)
            .ok_or(ComputerError::InvalidLayerIndex {
                index: layer,
                layer_count,
            })?;
        *slot = position;
        Ok(())
    }

    /// Value visible at (row, col) under the current rotations.
    ///
    /// Layers are checked in order. A layer with fewer than `row + 1` rings
    /// is skipped and never blocks the layers below it. Returns `None` when
    /// no layer fills the address.
    pub fn value_at(&self, row: usize, col: usize) -> Option<u32> {
        self.layers
            .iter()
            .zip(&self.positions)
            .find_map(|(layer, &position)| {
                let ring = layer.ring(row)?;
                let slot = (col as i64 + position as i64).rem_euclid(SLOTS as i64) as usize;
                ring.get(slot)
            })
    }

    /// Read the full 4x12 grid, snapshotting the offsets that produced it
    pub fn compute_grid(&self) -> Grid {
        let mut numbers = [[None; SLOTS]; ROWS];
        for (row, cells) in numbers.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.value_at(row, col);
            }
        }
        Grid::new(numbers, self.positions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::grecian_layers;

    fn constant_ring(value: u32) -> Ring {
        Ring::from_values([value; SLOTS])
    }

    #[test]
    fn test_ring_from_values_marks_zero_empty() {
        let ring = Ring::from_values([3, 0, 6, 0, 10, 0, 7, 0, 15, 0, 8, 0]);
        assert_eq!(ring.get(0), Some(3));
        assert_eq!(ring.get(1), None);
        assert_eq!(ring.get(10), Some(8));
        assert_eq!(ring.get(12), Some(3));
    }

    #[test]
    fn test_value_at_first_layer_wins() {
        let computer = GrecianComputer::new(vec![
            Layer::new([constant_ring(5)]),
            Layer::new([constant_ring(9)]),
        ]);
        assert_eq!(computer.value_at(0, 3), Some(5));
    }

    #[test]
    fn test_value_at_falls_through_empty_slots() {
        let computer = GrecianComputer::new(grecian_layers());
        // Layer 0 is empty at column 1, layer 1 shows 3 there
        assert_eq!(computer.value_at(0, 1), Some(3));
        assert_eq!(computer.value_at(0, 0), Some(3));
    }

    #[test]
    fn test_value_at_skips_shallow_layers() {
        // Shallow layers are full, so any leak would show up as 99
        let computer = GrecianComputer::new(vec![
            Layer::new([constant_ring(99)]),
            Layer::new([constant_ring(99), constant_ring(99)]),
            Layer::new([constant_ring(7); 4]),
        ]);
        for col in 0..SLOTS {
            assert_eq!(computer.value_at(1, col), Some(99));
            assert_eq!(computer.value_at(2, col), Some(7));
            assert_eq!(computer.value_at(3, col), Some(7));
        }
    }

    #[test]
    fn test_fourth_row_reads_only_four_ring_layers() {
        let mut computer = GrecianComputer::new(grecian_layers());
        // Rotating the shallow layers must not change row 3
        let before: Vec<_> = (0..SLOTS).map(|c| computer.value_at(3, c)).collect();
        computer.rotate(0, 5).unwrap();
        computer.rotate(1, 7).unwrap();
        computer.rotate(2, 3).unwrap();
        let after: Vec<_> = (0..SLOTS).map(|c| computer.value_at(3, c)).collect();
        assert_eq!(before, after);
        let expected = [1, 5, 9, 7, 12, 8, 6, 8, 10, 3, 10, 12].map(Some);
        assert_eq!(after, expected);
    }

    #[test]
    fn test_rotation_wraps_around() {
        let mut values = [0; SLOTS];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as u32 + 1;
        }
        let mut computer = GrecianComputer::new(vec![Layer::new([Ring::from_values(values)])]);
        computer.rotate(0, 1).unwrap();
        assert_eq!(computer.value_at(0, 11), Some(1));
        assert_eq!(computer.value_at(0, 0), Some(2));

        computer.rotate(0, 13).unwrap();
        assert_eq!(computer.value_at(0, 11), Some(1));

        computer.rotate(0, -1).unwrap();
        assert_eq!(computer.value_at(0, 0), Some(12));
    }

    #[test]
    fn test_value_at_absent_when_no_layer_fills() {
        let computer = GrecianComputer::new(vec![Layer::new([Ring::new([None; SLOTS])])]);
        assert_eq!(computer.value_at(0, 4), None);
        assert_eq!(computer.value_at(2, 4), None);
    }

    #[test]
    fn test_rotate_rejects_unknown_layer() {
        let mut computer = GrecianComputer::new(grecian_layers());
        assert_eq!(computer.layer_count(), 5);
        assert_eq!(
            computer.rotate(5, 1),
            Err(ComputerError::InvalidLayerIndex {
                index: 5,
                layer_count: 5
            })
        );
        assert_eq!(computer.positions(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_compute_grid_is_pure() {
        let mut computer = GrecianComputer::new(grecian_layers());
        computer.rotate(0, 4).unwrap();
        computer.rotate(3, 9).unwrap();
        let first = computer.compute_grid();
        let second = computer.compute_grid();
        assert_eq!(first, second);
        assert_eq!(first.positions(), &[4, 0, 0, 9, 0]);
    }
}

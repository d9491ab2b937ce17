//! This module contains the construction of the combinatorial structure of
//! a puzzle: its squares, its units, and the peer relation between squares.
//!
//! A *square* is one cell of the grid, identified by its row-major index. A
//! *unit* is a group of `size` squares that must collectively contain every
//! digit exactly once: one row, one column, or one block. The *peers* of a
//! square are all squares that share at least one unit with it. All of this
//! is a pure function of the block dimensions and is built once per
//! configuration, then shared by every solving step.

use crate::PuzzleGrid;
use crate::error::{PuzzleError, PuzzleResult};
use crate::index;
use crate::util;

/// The number of units every square belongs to: its row, its column, and
/// its block.
pub const UNITS_PER_SQUARE: usize = 3;

/// The combinatorial structure of a puzzle with given block dimensions:
/// the set of squares, the list of all units, and for every square the
/// units containing it and its peers.
///
/// Squares are identified by their row-major index in `0..size²`. Units are
/// identified by their index in [Topology::units], which lists the `size`
/// rows first, then the `size` columns, then the `size` blocks, each unit
/// holding its squares in ascending order. This fixed ordering is what makes
/// propagation and search reproducible across runs.
///
/// Blocks are `block_width` columns wide and `block_height` rows tall, so
/// the grid is tiled by `block_height` blocks per row of blocks and
/// `block_width` blocks per column of blocks.
#[derive(Clone, Debug)]
pub struct Topology {
    block_width: usize,
    block_height: usize,
    size: usize,
    units: Vec<Vec<usize>>,
    units_of: Vec<[usize; UNITS_PER_SQUARE]>,
    peers_of: Vec<Vec<usize>>
}

fn build_units(block_width: usize, block_height: usize, size: usize)
        -> Vec<Vec<usize>> {
    let mut units = Vec::with_capacity(3 * size);

    for row in 0..size {
        units.push((0..size).map(|column| index(column, row, size))
            .collect());
    }

    for column in 0..size {
        units.push((0..size).map(|row| index(column, row, size)).collect());
    }

    // There are block_width block-rows of height block_height, and
    // block_height block-columns of width block_width.
    for block_row in 0..block_width {
        for block_column in 0..block_height {
            let mut unit = Vec::with_capacity(size);

            for row_offset in 0..block_height {
                for column_offset in 0..block_width {
                    let row = block_row * block_height + row_offset;
                    let column = block_column * block_width + column_offset;
                    unit.push(index(column, row, size));
                }
            }

            units.push(unit);
        }
    }

    units
}

impl Topology {

    /// Builds the topology for the given block dimensions. The grid side
    /// length is `block_width · block_height`, yielding `size²` squares and
    /// `3 · size` units.
    ///
    /// # Errors
    ///
    /// If `block_width` or `block_height` is invalid (zero).
    pub fn new(block_width: usize, block_height: usize)
            -> PuzzleResult<Topology> {
        if block_width == 0 || block_height == 0 {
            return Err(PuzzleError::InvalidDimensions);
        }

        Ok(Topology::build(block_width, block_height))
    }

    /// Builds the topology matching the block dimensions of the given grid.
    /// Unlike [Topology::new], this cannot fail, since the grid's
    /// dimensions were already validated at its construction.
    pub fn for_grid(grid: &PuzzleGrid) -> Topology {
        Topology::build(grid.block_width(), grid.block_height())
    }

    fn build(block_width: usize, block_height: usize) -> Topology {
        let size = block_width * block_height;
        let square_count = size * size;
        let units = build_units(block_width, block_height, size);

        let mut units_of = vec![[0; UNITS_PER_SQUARE]; square_count];
        let mut membership_counts = vec![0; square_count];

        for (unit_index, unit) in units.iter().enumerate() {
            for &square in unit {
                units_of[square][membership_counts[square]] = unit_index;
                membership_counts[square] += 1;
            }
        }

        let mut peers_of = Vec::with_capacity(square_count);

        for square in 0..square_count {
            let mut is_peer = vec![false; square_count];

            for &unit_index in units_of[square].iter() {
                for &member in units[unit_index].iter() {
                    is_peer[member] = true;
                }
            }

            is_peer[square] = false;
            peers_of.push((0..square_count)
                .filter(|&other| is_peer[other])
                .collect());
        }

        Topology {
            block_width,
            block_height,
            size,
            units,
            units_of,
            peers_of
        }
    }

    /// Gets the width (number of columns) of one block.
    pub fn block_width(&self) -> usize {
        self.block_width
    }

    /// Gets the height (number of rows) of one block.
    pub fn block_height(&self) -> usize {
        self.block_height
    }

    /// Gets the side length of the grid, which is also the size of the
    /// digit alphabet.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the total number of squares, i.e. the square of [Topology::size].
    pub fn square_count(&self) -> usize {
        self.size * self.size
    }

    /// Gets all units of this topology: the rows, then the columns, then
    /// the blocks. Every unit contains exactly [Topology::size] squares in
    /// ascending order.
    pub fn units(&self) -> &[Vec<usize>] {
        &self.units
    }

    /// Gets the indices into [Topology::units] of the three units that
    /// contain the given square: its row, its column, and its block.
    pub fn units_of(&self, square: usize) -> &[usize; UNITS_PER_SQUARE] {
        &self.units_of[square]
    }

    /// Gets the peers of the given square, i.e. all squares sharing at
    /// least one unit with it, excluding the square itself, in ascending
    /// order. Every square has
    /// `3 · (size − 1) − (block_width − 1) − (block_height − 1)` peers.
    pub fn peers_of(&self, square: usize) -> &[usize] {
        &self.peers_of[square]
    }

    /// Gets the human-readable label of the given square, pairing an
    /// alphabetic row label with a 1-based column number, e.g. `A1` for the
    /// top-left square.
    pub fn square_label(&self, square: usize) -> String {
        format!("{}{}", util::row_label(square / self.size),
            square % self.size + 1)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn expected_peer_count(topology: &Topology) -> usize {
        3 * (topology.size() - 1) - (topology.block_width() - 1)
            - (topology.block_height() - 1)
    }

    fn assert_structure(block_width: usize, block_height: usize) {
        let topology = Topology::new(block_width, block_height).unwrap();
        let size = topology.size();

        assert_eq!(block_width * block_height, size);
        assert_eq!(3 * size, topology.units().len());

        for unit in topology.units() {
            assert_eq!(size, unit.len());
        }

        for square in 0..topology.square_count() {
            let memberships = topology.units().iter()
                .filter(|unit| unit.contains(&square))
                .count();

            assert_eq!(UNITS_PER_SQUARE, memberships);
            assert_eq!(expected_peer_count(&topology),
                topology.peers_of(square).len());
        }
    }

    #[test]
    fn square_blocks_structure() {
        assert_structure(2, 2);
        assert_structure(3, 3);
    }

    #[test]
    fn rectangular_blocks_structure() {
        assert_structure(3, 2);
        assert_structure(2, 3);
        assert_structure(4, 1);
        assert_structure(1, 1);
    }

    #[test]
    fn invalid_dimensions() {
        assert!(Topology::new(0, 3).is_err());
        assert!(Topology::new(2, 0).is_err());
    }

    #[test]
    fn peers_of_corner_square() {
        let topology = Topology::new(2, 2).unwrap();

        // Row 0, column 0 and the top-left block, minus the square itself.
        assert_eq!(vec![1, 2, 3, 4, 5, 8, 12], topology.peers_of(0));
    }

    #[test]
    fn wide_blocks_pin_geometry() {
        // 3x2 blocks on a 6x6 grid: the first block spans rows 0-1 and
        // columns 0-2.
        let topology = Topology::new(3, 2).unwrap();
        let first_block = &topology.units()[2 * 6];

        assert_eq!(&vec![0, 1, 2, 6, 7, 8], first_block);

        // The second block continues to the right.
        assert_eq!(&vec![3, 4, 5, 9, 10, 11], &topology.units()[2 * 6 + 1]);
    }

    #[test]
    fn tall_blocks_pin_geometry() {
        // 2x3 blocks on a 6x6 grid: the first block spans rows 0-2 and
        // columns 0-1.
        let topology = Topology::new(2, 3).unwrap();
        let first_block = &topology.units()[2 * 6];

        assert_eq!(&vec![0, 1, 6, 7, 12, 13], first_block);
    }

    #[test]
    fn units_of_lists_row_column_block() {
        let topology = Topology::new(2, 2).unwrap();

        // Square 5 is at row 1, column 1, in the top-left block. Rows
        // occupy unit indices 0..4, columns 4..8, blocks 8..12.
        let units_of = topology.units_of(5);

        assert_eq!(&[1, 5, 8], units_of);
        assert!(topology.units()[units_of[0]].contains(&4));
        assert!(topology.units()[units_of[1]].contains(&13));
        assert!(topology.units()[units_of[2]].contains(&0));
    }

    #[test]
    fn square_labels() {
        let topology = Topology::new(3, 3).unwrap();

        assert_eq!("A1", topology.square_label(0));
        assert_eq!("A9", topology.square_label(8));
        assert_eq!("I9", topology.square_label(80));
    }
}

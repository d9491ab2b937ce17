//! This module contains the constraint store and the propagation rules that
//! keep it consistent.
//!
//! The store maps every square to the set of digits it may still hold. Two
//! operations shrink it: [CandidateStore::assign] fixes a square to one
//! digit, [CandidateStore::eliminate] removes one digit from one square.
//! Both propagate their consequences until a fixed point is reached or a
//! [Contradiction] proves the store unsatisfiable: a square reduced to a
//! single candidate forbids that digit for all its peers (naked single),
//! and a unit reduced to a single possible square for some digit forces
//! the digit there (hidden single).
//!
//! Propagation never mutates a store a caller can still see: both
//! operations clone the store once and work the consequences off an
//! explicit queue on the private copy. On failure the caller's snapshot is
//! untouched, which is what allows the search to discard a branch without
//! any undo bookkeeping.

use crate::PuzzleGrid;
use crate::error::{Contradiction, SolveResult};
use crate::topology::Topology;
use crate::util::DigitSet;

use std::collections::VecDeque;

/// A pending propagation step: fix a square to a digit, or remove a digit
/// from a square's candidates.
enum Step {
    Assign(usize, usize),
    Eliminate(usize, usize)
}

/// A mapping from every square to its surviving candidate digits. While a
/// store is valid, every candidate set is non-empty and every unit has at
/// least one possible square for every digit; stores for which this no
/// longer holds are never returned, only signalled as [Contradiction].
///
/// A solved store has exactly one candidate per square, see
/// [CandidateStore::is_solved].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateStore {
    candidates: Vec<DigitSet>
}

impl CandidateStore {

    /// Creates a store in which every square of the given topology still
    /// admits the entire digit alphabet. Every square receives its own
    /// candidate set, allocated independently.
    pub fn unconstrained(topology: &Topology) -> CandidateStore {
        let size = topology.size();
        let candidates = (0..topology.square_count())
            .map(|_| DigitSet::full(size))
            .collect();

        CandidateStore {
            candidates
        }
    }

    /// Creates a store from a clue grid by starting unconstrained and
    /// assigning every clue, propagating each in turn. The grid must have
    /// the same block dimensions as the topology.
    ///
    /// # Errors
    ///
    /// If the clues contradict each other, e.g. because the same digit is
    /// given twice within one unit.
    pub fn from_clues(grid: &PuzzleGrid, topology: &Topology)
            -> SolveResult<CandidateStore> {
        debug_assert_eq!(grid.size(), topology.size());

        let mut store = CandidateStore::unconstrained(topology);

        for square in 0..topology.square_count() {
            if let Some(digit) = grid.cell(square) {
                store.run(topology, Step::Assign(square, digit))?;
            }
        }

        Ok(store)
    }

    /// Gets the candidate set of the given square.
    pub fn candidates(&self, square: usize) -> &DigitSet {
        &self.candidates[square]
    }

    /// Indicates whether this store is solved, i.e. every square has
    /// exactly one remaining candidate.
    pub fn is_solved(&self) -> bool {
        self.candidates.iter().all(|candidates| candidates.len() == 1)
    }

    /// Gets the total number of remaining candidates across all squares.
    /// Every successful propagation strictly decreases this number, which
    /// bounds the depth of the search.
    pub fn candidate_count(&self) -> usize {
        self.candidates.iter().map(DigitSet::len).sum()
    }

    /// Returns a new store in which the given square is fixed to the given
    /// digit, with all consequences propagated. This store is unaffected.
    ///
    /// # Errors
    ///
    /// If fixing the digit makes the store unsatisfiable, or the digit is
    /// no longer a candidate of the square.
    pub fn assign(&self, topology: &Topology, square: usize, digit: usize)
            -> SolveResult<CandidateStore> {
        let mut next = self.clone();
        next.run(topology, Step::Assign(square, digit))?;
        Ok(next)
    }

    /// Returns a new store in which the given digit is removed from the
    /// given square's candidates, with all consequences propagated. If the
    /// digit is not a candidate of the square, this is a no-op and the
    /// returned store equals this one. This store is unaffected.
    ///
    /// # Errors
    ///
    /// If the removal makes the store unsatisfiable.
    pub fn eliminate(&self, topology: &Topology, square: usize, digit: usize)
            -> SolveResult<CandidateStore> {
        let mut next = self.clone();
        next.run(topology, Step::Eliminate(square, digit))?;
        Ok(next)
    }

    /// Projects this store onto a grid, writing the sole candidate of every
    /// decided square into a fresh grid of the topology's dimensions.
    /// Squares with more than one remaining candidate are left empty, so
    /// the result is full exactly if this store [is
    /// solved](CandidateStore::is_solved).
    pub fn to_grid(&self, topology: &Topology) -> PuzzleGrid {
        let cells = self.candidates.iter()
            .map(DigitSet::sole)
            .collect();

        PuzzleGrid::from_parts(topology.block_width(),
            topology.block_height(), cells)
    }

    /// Works the given step and all its consequences off a FIFO queue,
    /// mutating this store in place. Callers must hold the only reference.
    fn run(&mut self, topology: &Topology, first: Step) -> SolveResult<()> {
        let mut queue = VecDeque::new();
        queue.push_back(first);

        while let Some(step) = queue.pop_front() {
            match step {
                Step::Assign(square, digit) =>
                    self.apply_assign(square, digit, &mut queue)?,
                Step::Eliminate(square, digit) =>
                    self.apply_eliminate(topology, square, digit,
                        &mut queue)?
            }
        }

        Ok(())
    }

    fn apply_assign(&mut self, square: usize, digit: usize,
            queue: &mut VecDeque<Step>) -> SolveResult<()> {
        if !self.candidates[square].contains(digit) {
            return Err(Contradiction);
        }

        for other in self.candidates[square].iter() {
            if other != digit {
                queue.push_back(Step::Eliminate(square, other));
            }
        }

        Ok(())
    }

    fn apply_eliminate(&mut self, topology: &Topology, square: usize,
            digit: usize, queue: &mut VecDeque<Step>) -> SolveResult<()> {
        if !self.candidates[square].remove(digit) {
            // Already absent, nothing to propagate.
            return Ok(());
        }

        if self.candidates[square].is_empty() {
            return Err(Contradiction);
        }

        // Naked single: a square reduced to one candidate forbids that
        // digit for all of its peers.
        if let Some(survivor) = self.candidates[square].sole() {
            for &peer in topology.peers_of(square) {
                queue.push_back(Step::Eliminate(peer, survivor));
            }
        }

        // Hidden single: a unit with a single remaining square for the
        // removed digit forces the digit there. A unit with none is
        // unsatisfiable.
        for &unit_index in topology.units_of(square).iter() {
            let mut places = topology.units()[unit_index].iter()
                .filter(|&&member| self.candidates[member].contains(digit));

            match (places.next(), places.next()) {
                (None, _) => return Err(Contradiction),
                (Some(&place), None) =>
                    queue.push_back(Step::Assign(place, digit)),
                _ => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn store_2x2() -> (Topology, CandidateStore) {
        let topology = Topology::new(2, 2).unwrap();
        let store = CandidateStore::unconstrained(&topology);
        (topology, store)
    }

    #[test]
    fn unconstrained_store_admits_everything() {
        let (topology, store) = store_2x2();

        assert!(!store.is_solved());
        assert_eq!(4 * 16, store.candidate_count());

        for square in 0..topology.square_count() {
            assert_eq!(4, store.candidates(square).len());
        }
    }

    #[test]
    fn assign_removes_digit_from_peers() {
        let (topology, store) = store_2x2();
        let assigned = store.assign(&topology, 0, 3).unwrap();

        assert_eq!(Some(3), assigned.candidates(0).sole());

        for &peer in topology.peers_of(0) {
            assert!(!assigned.candidates(peer).contains(3));
        }

        // A square sharing no unit with square 0 keeps all candidates.
        assert_eq!(4, assigned.candidates(10).len());
    }

    #[test]
    fn assign_leaves_original_store_untouched() {
        let (topology, store) = store_2x2();
        let snapshot = store.clone();
        let _ = store.assign(&topology, 0, 3).unwrap();

        assert_eq!(snapshot, store);
    }

    #[test]
    fn assign_absent_digit_is_a_contradiction() {
        let (topology, store) = store_2x2();
        let store = store.eliminate(&topology, 0, 2).unwrap();

        assert_eq!(Err(Contradiction), store.assign(&topology, 0, 2));
    }

    #[test]
    fn eliminate_is_idempotent() {
        let (topology, store) = store_2x2();
        let once = store.eliminate(&topology, 5, 1).unwrap();
        let twice = once.eliminate(&topology, 5, 1).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn eliminating_last_place_in_unit_is_a_contradiction() {
        let (topology, store) = store_2x2();

        // Digit 1 loses three of its four places in row 0. The final
        // elimination leaves the row without a place for it.
        let store = store.eliminate(&topology, 0, 1).unwrap();
        let store = store.eliminate(&topology, 1, 1).unwrap();
        let store = store.eliminate(&topology, 2, 1).unwrap();

        assert_eq!(Err(Contradiction), store.eliminate(&topology, 3, 1));
    }

    #[test]
    fn hidden_single_forces_assignment() {
        let (topology, store) = store_2x2();

        // Digit 1 is removed from all of row 0 except square 0, so it must
        // go there, which in turn decides the square entirely.
        let store = store.eliminate(&topology, 1, 1).unwrap();
        let store = store.eliminate(&topology, 2, 1).unwrap();
        let store = store.eliminate(&topology, 3, 1).unwrap();

        assert_eq!(Some(1), store.candidates(0).sole());

        // As a consequence, no peer of square 0 admits digit 1 anymore.
        for &peer in topology.peers_of(0) {
            assert!(!store.candidates(peer).contains(1));
        }
    }

    #[test]
    fn from_clues_applies_all_clues() {
        let topology = Topology::new(2, 2).unwrap();
        let grid = PuzzleGrid::parse("2x2; , , , , ,4,3, , ,3, ,1,4, , , ")
            .unwrap();
        let store = CandidateStore::from_clues(&grid, &topology).unwrap();

        assert_eq!(Some(4), store.candidates(5).sole());
        assert_eq!(Some(3), store.candidates(6).sole());
        assert_eq!(Some(1), store.candidates(11).sole());

        // Row peers of the clues have lost the clue digits.
        assert!(!store.candidates(4).contains(4));
        assert!(!store.candidates(4).contains(3));
        assert!(!store.candidates(13).contains(4));
    }

    #[test]
    fn duplicate_clues_in_row_contradict() {
        // The two 1s share row 0 but no block or column.
        let topology = Topology::new(2, 2).unwrap();
        let grid = PuzzleGrid::parse("2x2;1, , ,1, , , , , , , , , , , , ")
            .unwrap();

        assert_eq!(Err(Contradiction),
            CandidateStore::from_clues(&grid, &topology));
    }

    #[test]
    fn duplicate_clues_in_column_contradict() {
        // The two 1s share column 0 but no block or row.
        let topology = Topology::new(2, 2).unwrap();
        let grid = PuzzleGrid::parse("2x2;1, , , , , , , , , , , ,1, , , ")
            .unwrap();

        assert_eq!(Err(Contradiction),
            CandidateStore::from_clues(&grid, &topology));
    }

    #[test]
    fn duplicate_clues_in_block_contradict() {
        // The two 1s share the top-left block but no row or column.
        let topology = Topology::new(2, 2).unwrap();
        let grid = PuzzleGrid::parse("2x2;1, , , , ,1, , , , , , , , , , ")
            .unwrap();

        assert_eq!(Err(Contradiction),
            CandidateStore::from_clues(&grid, &topology));
    }

    #[test]
    fn to_grid_projects_decided_squares() {
        let (topology, store) = store_2x2();
        let store = store.assign(&topology, 0, 3).unwrap();
        let projected = store.to_grid(&topology);

        assert_eq!(Some(3), projected.get_cell(0, 0).unwrap());
        assert_eq!(None, projected.get_cell(2, 2).unwrap());
        assert!(!projected.is_full());
    }
}

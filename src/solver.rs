//! This module contains the backtracking search that completes what
//! propagation alone cannot resolve, together with the [solve] facade that
//! runs the entire pipeline on a clue grid.
//!
//! The search is depth-first and forward-checking: it picks the undecided
//! square with the fewest remaining candidates (minimum remaining values),
//! tries each of its candidates on a fresh snapshot of the store, and
//! recurses. A [Contradiction] from a branch is not an error, it is the
//! signal to try the next candidate; only when every branch of every
//! candidate is exhausted does the search itself report a contradiction.
//!
//! The staged interface can be driven directly when intermediate candidate
//! sets are of interest:
//!
//! ```
//! use sudoku_propagate::PuzzleGrid;
//! use sudoku_propagate::propagation::CandidateStore;
//! use sudoku_propagate::solver;
//! use sudoku_propagate::topology::Topology;
//!
//! let puzzle = PuzzleGrid::parse("2x2; , , , , ,4,3, , ,3, ,1,4, , , ")
//!     .unwrap();
//! let topology = Topology::for_grid(&puzzle);
//! let store = CandidateStore::from_clues(&puzzle, &topology).unwrap();
//! let solved = solver::search(&store, &topology).unwrap();
//!
//! assert!(solved.is_solved());
//! assert!(solved.to_grid(&topology).is_full());
//! ```

use crate::PuzzleGrid;
use crate::error::{Contradiction, SolveResult};
use crate::propagation::CandidateStore;
use crate::topology::Topology;

/// Selects the square to branch on: the one with the smallest candidate set
/// of size greater than 1, ties broken by the lowest row-major index. Must
/// only be called on stores that are not solved.
fn select_branch_square(store: &CandidateStore, topology: &Topology)
        -> usize {
    let mut best_square = 0;
    let mut best_len = usize::MAX;

    for square in 0..topology.square_count() {
        let len = store.candidates(square).len();

        if len > 1 && len < best_len {
            best_square = square;
            best_len = len;
        }
    }

    best_square
}

/// Searches for a completion of the given store in which every square has
/// exactly one candidate, using depth-first backtracking with the minimum-
/// remaining-values heuristic. Candidates of the branch square are tried in
/// ascending digit order and the first solution found is returned; the
/// given store is unaffected.
///
/// Each attempted assignment strictly reduces the total number of
/// candidates in its snapshot, so the recursion depth is bounded by the
/// number of squares.
///
/// # Errors
///
/// If no branch leads to a solution, i.e. the store admits no solution at
/// all.
pub fn search(store: &CandidateStore, topology: &Topology)
        -> SolveResult<CandidateStore> {
    if store.is_solved() {
        return Ok(store.clone());
    }

    let square = select_branch_square(store, topology);

    for digit in store.candidates(square).iter() {
        if let Ok(assigned) = store.assign(topology, square, digit) {
            if let Ok(solved) = search(&assigned, topology) {
                return Ok(solved);
            }
        }
    }

    Err(Contradiction)
}

/// Solves the given clue grid: builds the topology for its block
/// dimensions, initializes a candidate store from the clues, searches the
/// remaining ambiguity, and projects the result back onto a grid. This is
/// the single engine entry point shared by the library interface and the
/// command-line interface.
///
/// # Errors
///
/// If the clues are contradictory or no completion of them exists.
pub fn solve(grid: &PuzzleGrid) -> SolveResult<PuzzleGrid> {
    let topology = Topology::for_grid(grid);
    let store = CandidateStore::from_clues(grid, &topology)?;
    let solved = search(&store, &topology)?;
    Ok(solved.to_grid(&topology))
}

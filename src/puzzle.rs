//! The crate's top-level entry point: an initial board paired with the
//! search that solves it.

use crate::error::SolveError;
use crate::solution::Solution;
use crate::state::State;

/// A puzzle instance: just the starting board. Kept as a thin wrapper
/// rather than folding `solve` into `State` so the engine (geometry, pieces,
/// states) stays independent of the search that drives it.
pub struct Puzzle {
    initial_state: State,
}

impl Puzzle {
    pub fn new(initial_state: State) -> Puzzle {
        Puzzle { initial_state }
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    /// Runs breadth-first search to the first solved state (§4.7) and
    /// returns the compacted move sequence.
    pub fn solve(&self) -> Result<Solution, SolveError> {
        crate::search::solve(self.initial_state.clone())
    }
}

//! Solution notation (§4.8, §6): the search produces one unit move at a
//! time; this module compacts runs of the same piece moving the same
//! direction into a single step and renders the result.

use std::fmt;

use crate::direction::Direction;
use crate::piece::PieceId;

/// One or more consecutive unit moves of the same piece in the same
/// direction, collapsed into a single notation token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Step {
    pub piece: PieceId,
    pub direction: Direction,
    pub distance: u32,
}

impl Step {
    fn can_merge_with(&self, piece: PieceId, direction: Direction) -> bool {
        self.piece == piece && self.direction == direction
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.piece, self.direction.letter(), self.distance)
    }
}

/// A complete move sequence from the initial state to a solved one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    steps: Vec<Step>,
}

impl Solution {
    /// Merges a flat list of unit moves, in order, into compacted steps
    /// (§4.8: "consecutive unit moves of the same piece in the same
    /// direction merge into one step").
    pub fn compact(unit_moves: Vec<(PieceId, Direction)>) -> Solution {
        let mut steps: Vec<Step> = Vec::new();

        for (piece, direction) in unit_moves {
            match steps.last_mut() {
                Some(last) if last.can_merge_with(piece, direction) => last.distance += 1,
                _ => steps.push(Step { piece, direction, distance: 1 }),
            }
        }

        Solution { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps after compaction.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Number of unit moves before compaction — the BFS depth of the
    /// solved state.
    pub fn move_count(&self) -> u32 {
        self.steps.iter().map(|step| step.distance).sum()
    }

    /// Renders the comma-and-space-joined notation from §6, e.g.
    /// `"4L2, 5L2, XU3, XR2, 6L2, 7L1, 8R2, XD5"`.
    pub fn to_notation(&self) -> String {
        self.steps.iter().map(Step::to_string).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

//! Board-relative positions and the deltas used to translate them.

use std::ops::{Add, Sub};

/// A displacement between two [`Position`]s, measured in rows and columns.
///
/// `row` increases downward and `column` increases rightward, matching the
/// row-major order the text grammar uses.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Delta {
    pub row: i32,
    pub column: i32,
}

/// A cell on the board. Immutable; arithmetic always produces a new value.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub fn new(row: i32, column: i32) -> Position {
        Position { row, column }
    }

    /// True when the position lies within a board of the given size.
    pub fn in_bounds(self, height: u16, width: u16) -> bool {
        self.row >= 0 && self.row < height as i32 && self.column >= 0 && self.column < width as i32
    }
}

impl Add<Delta> for Position {
    type Output = Position;

    fn add(self, delta: Delta) -> Position {
        Position::new(self.row + delta.row, self.column + delta.column)
    }
}

impl Sub<Position> for Position {
    type Output = Delta;

    fn sub(self, other: Position) -> Delta {
        Delta {
            row: self.row - other.row,
            column: self.column - other.column,
        }
    }
}

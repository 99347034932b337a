//! Boats and waves: the two kinds of piece that occupy a board.

use std::fmt;

use smallvec::SmallVec;

use crate::direction::Direction;
use crate::geometry::Position;

/// The distinguished boat whose arrival at the port solves the puzzle.
pub const RED_BOAT_ID: char = 'X';

/// A piece's identity, used to look pieces up and to render solution
/// notation. Boats are named by their input letter; waves by their
/// 1-based row number (§6).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub enum PieceId {
    Boat(char),
    Wave(u16),
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceId::Boat(id) => write!(f, "{id}"),
            PieceId::Wave(row) => write!(f, "{row}"),
        }
    }
}

/// Most boats and wave rows in practice are short; inline storage avoids an
/// allocation for the common case while still allowing longer rows.
pub type Cells = SmallVec<[Position; 8]>;

/// A tagged piece: a boat (cells ordered front-first) or a wave (the block
/// cells occupying one row).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Piece {
    Boat { id: char, cells: Cells },
    Wave { row: u16, cells: Cells },
}

impl Piece {
    pub fn id(&self) -> PieceId {
        match self {
            Piece::Boat { id, .. } => PieceId::Boat(*id),
            Piece::Wave { row, .. } => PieceId::Wave(*row),
        }
    }

    pub fn cells(&self) -> &[Position] {
        match self {
            Piece::Boat { cells, .. } => cells,
            Piece::Wave { cells, .. } => cells,
        }
    }

    /// The boat's front cell — the first position, by construction. `None`
    /// for waves, which have no orientation.
    pub fn front(&self) -> Option<Position> {
        match self {
            Piece::Boat { cells, .. } => cells.first().copied(),
            Piece::Wave { .. } => None,
        }
    }

    /// Directions this piece is allowed to move in, independent of board
    /// state (§4.2).
    pub fn allowed_directions(&self) -> &'static [Direction] {
        match self {
            Piece::Boat { .. } => &Direction::ALL,
            Piece::Wave { .. } => &[Direction::Left, Direction::Right],
        }
    }

    /// A new piece translated by one unit step, preserving cell order (so a
    /// boat's front cell stays first). Does not check board legality; that
    /// is `State::is_valid`'s job.
    #[must_use]
    pub fn translated(&self, direction: Direction) -> Piece {
        let delta = direction.delta();
        let shift = |cells: &Cells| -> Cells { cells.iter().map(|&p| p + delta).collect() };

        match self {
            Piece::Boat { id, cells } => Piece::Boat { id: *id, cells: shift(cells) },
            Piece::Wave { row, cells } => Piece::Wave { row: *row, cells: shift(cells) },
        }
    }

    fn is_boat(&self) -> bool {
        matches!(self, Piece::Boat { .. })
    }

    /// True iff `self` and `other` are of different kinds and share a cell.
    ///
    /// Same-kind pieces never need this check in a solvable board: wave rows
    /// are disjoint, and no row has room for two adjacent boats to push each
    /// other horizontally (§4.2, §9). `is_valid`'s full collision scan does
    /// not rely on this shortcut, so a board that violated the assumption
    /// would still be caught.
    pub fn collides_with(&self, other: &Piece) -> bool {
        self.is_boat() != other.is_boat()
            && self.cells().iter().any(|a| other.cells().contains(a))
    }

    /// The character this piece shows at `position` in the rendered grid
    /// (§4.6): the boat's lowercase letter at its front, uppercase
    /// elsewhere; `#` for every wave cell.
    pub fn character(&self, position: Position) -> u8 {
        match self {
            Piece::Boat { id, .. } => {
                if self.front() == Some(position) {
                    id.to_ascii_lowercase() as u8
                } else {
                    id.to_ascii_uppercase() as u8
                }
            }
            Piece::Wave { .. } => b'#',
        }
    }
}

//! An immutable board state: the pieces on it, plus the operations the
//! search drives (`apply_move`, `is_valid`, `is_solved`) and the canonical
//! rendering used as the visited-map key (§4.6).

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::BoardConfig;
use crate::direction::Direction;
use crate::piece::{Piece, PieceId, RED_BOAT_ID};

/// A board state. Successors are always new values (§3: "States are
/// retained ... They are never mutated after construction").
#[derive(Clone, Debug)]
pub struct State {
    pieces: Vec<Piece>,
    config: BoardConfig,
    /// The HxW grid of rendered characters, row-major, without separators.
    /// Computed once at construction time so equality and hashing are cheap
    /// even though `height`/`width` aren't compile-time constants (design
    /// note: "a fixed-size packed byte array ... is both faster and
    /// smaller"). Cells belonging to out-of-bounds pieces (only possible on
    /// a not-yet-validated successor) are simply left as gaps here;
    /// `is_valid` checks bounds directly against the pieces, not this grid.
    canonical: Box<[u8]>,
}

impl State {
    pub fn new(pieces: Vec<Piece>, config: BoardConfig) -> State {
        let canonical = render_grid(&pieces, &config);
        State { pieces, config, canonical }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn find_piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id() == id)
    }

    /// Applies `direction` to the piece identified by `id` and propagates
    /// any forced pushes, returning the successor state (§4.3). Does not
    /// itself check legality; call `is_valid` on the result.
    #[must_use]
    pub fn apply_move(&self, id: PieceId, direction: Direction) -> State {
        let piece_idx = self
            .pieces
            .iter()
            .position(|piece| piece.id() == id)
            .expect("apply_move called with an id not present in this state");

        debug_assert!(
            self.pieces[piece_idx].allowed_directions().contains(&direction),
            "invariant violation: {id} cannot move {direction:?}"
        );

        if direction.is_horizontal() {
            self.push(piece_idx, direction)
        } else {
            self.translate_one(piece_idx, direction)
        }
    }

    /// Vertical motion never pushes anything else (§4.3): waves can't move
    /// vertically, and a boat pushing a boat vertically is just two unit
    /// moves BFS already enumerates separately.
    fn translate_one(&self, piece_idx: usize, direction: Direction) -> State {
        let mut pieces = self.pieces.clone();
        pieces[piece_idx] = pieces[piece_idx].translated(direction);
        State::new(pieces, self.config)
    }

    /// Horizontal push propagation (§4.3): a FIFO work queue seeded with the
    /// requested piece. Each dequeued piece is translated in place; any
    /// not-yet-queued piece of the *other* kind that now overlaps it is
    /// enqueued. Terminates because each piece is moved at most once.
    fn push(&self, piece_idx: usize, direction: Direction) -> State {
        let mut pieces = self.pieces.clone();
        let mut queued = vec![false; pieces.len()];
        let mut queue = VecDeque::new();

        queue.push_back(piece_idx);
        queued[piece_idx] = true;

        while let Some(idx) = queue.pop_front() {
            pieces[idx] = pieces[idx].translated(direction);

            for other in 0..pieces.len() {
                if !queued[other] && pieces[idx].collides_with(&pieces[other]) {
                    queued[other] = true;
                    queue.push_back(other);
                }
            }
        }

        State::new(pieces, self.config)
    }

    /// True iff no two piece cells coincide and every cell is in bounds
    /// (§4.4). Boat contiguity doesn't need re-checking: `translated` shifts
    /// every cell of a piece by the same delta, so shape is always
    /// preserved.
    pub fn is_valid(&self) -> bool {
        !self.has_collision() && !self.has_out_of_bounds()
    }

    fn has_collision(&self) -> bool {
        let mut seen = HashSet::new();
        for piece in &self.pieces {
            for &cell in piece.cells() {
                if !seen.insert(cell) {
                    return true;
                }
            }
        }
        false
    }

    fn has_out_of_bounds(&self) -> bool {
        self.pieces
            .iter()
            .flat_map(Piece::cells)
            .any(|cell| !cell.in_bounds(self.config.height, self.config.width))
    }

    /// True iff the red boat occupies exactly the port's two cells, front
    /// first (§4.5, §9 Open Questions: the strict front-at-front reading).
    /// A boat with any extra cell beyond the port pair does not count, even
    /// if its first two cells line up with the port.
    pub fn is_solved(&self) -> bool {
        match self.find_piece(PieceId::Boat(RED_BOAT_ID)) {
            Some(piece) => piece.cells() == [self.config.port_front, self.config.port_back],
            None => false,
        }
    }

    /// The canonical HxW rendering (§4.6), one row per line.
    pub fn render(&self) -> String {
        let width = self.config.width as usize;
        let mut out = String::with_capacity(self.canonical.len() + self.config.height as usize);

        for (i, &byte) in self.canonical.iter().enumerate() {
            if i > 0 && i % width == 0 {
                out.push('\n');
            }
            out.push(byte as char);
        }

        out
    }
}

fn render_grid(pieces: &[Piece], config: &BoardConfig) -> Box<[u8]> {
    let mut grid = vec![b'-'; config.cell_count()].into_boxed_slice();

    for piece in pieces {
        for &cell in piece.cells() {
            if cell.in_bounds(config.height, config.width) {
                let index = cell.row as usize * config.width as usize + cell.column as usize;
                grid[index] = piece.character(cell);
            }
        }
    }

    grid
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

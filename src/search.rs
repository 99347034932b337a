//! Breadth-first search over the state space (§4.7): the frontier, the
//! visited map with back-pointers, and reconstruction into a [`Solution`].

use std::collections::VecDeque;

use ahash::AHashMap;
use indicatif::{ProgressBar, ProgressStyle};

use crate::direction::Direction;
use crate::error::SolveError;
use crate::piece::PieceId;
use crate::solution::Solution;
use crate::state::State;

/// How a visited state was first reached, or nothing for the initial state.
struct Backpointer {
    parent: State,
    piece: PieceId,
    direction: Direction,
}

/// Runs breadth-first search from `initial` to the first solved state,
/// returning the compacted [`Solution`]. BFS depth order guarantees the
/// solution has minimum move count (§5 "Ordering guarantees").
pub fn solve(initial: State) -> Result<Solution, SolveError> {
    if initial.is_solved() {
        log::info!("initial state is already solved");
        return Ok(Solution::compact(Vec::new()));
    }

    let mut visited: AHashMap<State, Option<Backpointer>> = AHashMap::new();
    let mut frontier: VecDeque<(State, u32)> = VecDeque::new();

    visited.insert(initial.clone(), None);
    frontier.push_back((initial, 0));

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} depth {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    let mut last_logged_depth = 0;

    while let Some((state, depth)) = frontier.pop_front() {
        if depth != last_logged_depth {
            last_logged_depth = depth;
            spinner.set_message(format!("{depth} ({} visited, {} queued)", visited.len(), frontier.len()));
            spinner.tick();
            log::debug!(
                "depth {depth}: {} states visited, {} queued",
                visited.len(),
                frontier.len()
            );
        }

        for piece in ordered_pieces(&state, &visited) {
            for &direction in piece.allowed_directions() {
                let successor = state.apply_move(piece.id(), direction);
                if !successor.is_valid() || visited.contains_key(&successor) {
                    continue;
                }

                let is_solved = successor.is_solved();
                visited.insert(
                    successor.clone(),
                    Some(Backpointer { parent: state.clone(), piece: piece.id(), direction }),
                );

                if is_solved {
                    spinner.finish_and_clear();
                    log::info!("solved at depth {}", depth + 1);
                    return Ok(reconstruct(&visited, successor));
                }

                frontier.push_back((successor, depth + 1));
            }
        }
    }

    spinner.finish_and_clear();
    Err(SolveError::NoSolution)
}

/// Enumerates `state`'s pieces with the piece that produced `state` moved to
/// the front (§4.7 step 3), maximizing the chance consecutive moves of the
/// same piece compact into one step. Purely an ordering heuristic: it never
/// changes which states are reachable, only the order successors of a given
/// state are generated in.
fn ordered_pieces<'a>(
    state: &'a State,
    visited: &AHashMap<State, Option<Backpointer>>,
) -> Vec<&'a crate::piece::Piece> {
    let mut pieces: Vec<&crate::piece::Piece> = state.pieces().iter().collect();

    if let Some(Some(backpointer)) = visited.get(state) {
        if let Some(index) = pieces.iter().position(|piece| piece.id() == backpointer.piece) {
            pieces.swap(0, index);
        }
    }

    pieces
}

/// Walks back-pointers from `solved` to the initial state, reverses the
/// collected unit moves, and compacts them into a [`Solution`] (§4.7
/// Reconstruction, §4.8).
fn reconstruct(visited: &AHashMap<State, Option<Backpointer>>, solved: State) -> Solution {
    let mut unit_moves = Vec::new();
    let mut current = solved;

    loop {
        match visited.get(&current).expect("visited state must have an entry") {
            Some(backpointer) => {
                unit_moves.push((backpointer.piece, backpointer.direction));
                current = backpointer.parent.clone();
            }
            None => break,
        }
    }

    unit_moves.reverse();
    Solution::compact(unit_moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;
    use crate::geometry::Position;
    use crate::parser::parse_state;

    fn config() -> BoardConfig {
        BoardConfig {
            height: 3,
            width: 1,
            port_front: Position::new(2, 0),
            port_back: Position::new(1, 0),
        }
    }

    #[test]
    fn already_solved_needs_no_moves() {
        let state = parse_state("-\nX\nx\n", &config()).unwrap();
        let solution = solve(state).unwrap();
        assert_eq!(solution.move_count(), 0);
        assert_eq!(solution.step_count(), 0);
        assert_eq!(solution.to_notation(), "");
    }

    #[test]
    fn single_step_solve() {
        // Front below tail throughout: a boat's internal cell order never
        // flips under translation, so the tail sits above the front both
        // before and after the move.
        let state = parse_state("X\nx\n-\n", &config()).unwrap();
        let solution = solve(state).unwrap();
        assert_eq!(solution.to_notation(), "XD1");
        assert_eq!(solution.move_count(), 1);
        assert_eq!(solution.step_count(), 1);
    }

    #[test]
    fn no_solution_is_reported() {
        // The boat already fills the only column; any vertical move runs it
        // off the board, so the frontier drains after the initial state.
        let boxed_in = BoardConfig {
            height: 2,
            width: 1,
            port_front: Position::new(1, 0),
            port_back: Position::new(0, 0),
        };
        let state = parse_state("x\nX\n", &boxed_in).unwrap();
        let result = solve(state);
        assert!(matches!(result, Err(SolveError::NoSolution)));
    }

    #[test]
    fn push_propagation_solve_reaches_port_in_one_wave_move() {
        // Pushing wave 1 right drags boat X along with it (their cells
        // overlap after the wave's translation), landing the boat exactly
        // on the port in a single propagated move.
        let config = BoardConfig {
            height: 1,
            width: 5,
            port_front: Position::new(0, 4),
            port_back: Position::new(0, 3),
        };
        let state = parse_state("##Xx-\n", &config).unwrap();
        let solution = solve(state).unwrap();
        assert_eq!(solution.to_notation(), "1R1");
        assert_eq!(solution.move_count(), 1);
        assert_eq!(solution.step_count(), 1);
    }
}

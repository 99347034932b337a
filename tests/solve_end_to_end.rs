use stormy_seas::{parse_state, BoardConfig, Direction, PieceId, Position, Puzzle, SolveError};

/// (a) Already solved: the reference board's red boat sits front-at-front,
/// tail-at-back from the start.
#[test]
fn already_solved_needs_zero_moves() {
    let config = BoardConfig::default();
    let mut rows = vec!["-".repeat(config.width as usize); config.height as usize];
    rows[config.port_front.row as usize]
        .replace_range(config.port_front.column as usize..=config.port_front.column as usize, "x");
    rows[config.port_back.row as usize]
        .replace_range(config.port_back.column as usize..=config.port_back.column as usize, "X");
    let text = rows.join("\n") + "\n";

    let state = parse_state(&text, &config).unwrap();
    let puzzle = Puzzle::new(state);
    let solution = puzzle.solve().unwrap();

    assert_eq!(solution.move_count(), 0);
    assert_eq!(solution.step_count(), 0);
    assert_eq!(solution.to_notation(), "");
}

/// (b) Single-step solve: the red boat is one row short of port, nothing
/// blocking its path.
#[test]
fn single_step_solve_moves_the_red_boat_down() {
    let config = BoardConfig {
        height: 3,
        width: 1,
        port_front: Position::new(2, 0),
        port_back: Position::new(1, 0),
    };
    // Tail at row 0, front at row 1: one Down shifts both cells into port.
    let state = parse_state("X\nx\n-\n", &config).unwrap();
    let puzzle = Puzzle::new(state);
    let solution = puzzle.solve().unwrap();

    assert_eq!(solution.to_notation(), "XD1");
    assert_eq!(solution.move_count(), 1);
    assert_eq!(solution.step_count(), 1);
}

/// (d) Push propagation: moving wave 1 drags the red boat along with it,
/// landing it in port in the same single search edge.
#[test]
fn push_propagation_moves_the_dragged_piece_too() {
    let config = BoardConfig {
        height: 1,
        width: 5,
        port_front: Position::new(0, 4),
        port_back: Position::new(0, 3),
    };
    let state = parse_state("##Xx-\n", &config).unwrap();
    let puzzle = Puzzle::new(state);
    let solution = puzzle.solve().unwrap();

    assert_eq!(solution.to_notation(), "1R1");
    assert_eq!(solution.move_count(), 1);
}

/// (e) Blocked push: a push that would shove a cell off the board is
/// invalid on the successor itself, not refused at move time.
#[test]
fn blocked_push_yields_an_invalid_successor() {
    let config = BoardConfig {
        height: 1,
        width: 4,
        port_front: Position::new(0, 3),
        port_back: Position::new(0, 2),
    };
    // Pushing wave 1 right would shove the boat's front to column 4, off
    // the W=4 board.
    let state = parse_state("##Xx\n", &config).unwrap();
    let wave = state.find_piece(PieceId::Wave(1)).unwrap().id();

    let pushed = state.apply_move(wave, Direction::Right);
    assert!(!pushed.is_valid());
}

/// (f) No-solution detection: the boat already fills its only column, so
/// every move runs a cell off the board and the frontier drains.
#[test]
fn unsolvable_board_reports_no_solution() {
    let config = BoardConfig {
        height: 2,
        width: 1,
        port_front: Position::new(1, 0),
        port_back: Position::new(0, 0),
    };
    let state = parse_state("x\nX\n", &config).unwrap();
    let puzzle = Puzzle::new(state);
    let result = puzzle.solve();

    assert!(matches!(result, Err(SolveError::NoSolution)));
}

/// A multi-step solve needing both a push and the boat's own moves. The
/// boat must travel two columns right (dragging wave 1 along on the first
/// step) and one row down, so no path shorter than 3 unit moves exists —
/// each search edge can shift the boat by at most one cell along one axis —
/// while an explicit 3-move path (two Rights, one Down) is reachable and
/// valid, so BFS must return a solution of exactly that length.
#[test]
fn multi_step_solve_matches_the_hand_derived_shortest_path_length() {
    let config = BoardConfig {
        height: 3,
        width: 5,
        port_front: Position::new(2, 2),
        port_back: Position::new(1, 2),
    };
    let text = "X##--\nx----\n-----\n";

    let state = parse_state(text, &config).unwrap();
    let puzzle = Puzzle::new(state);
    let solution = puzzle.solve().unwrap();

    assert_eq!(solution.move_count(), 3);
    let total: u32 = solution.steps().iter().map(|step| step.distance).sum();
    assert_eq!(total, solution.move_count());
}

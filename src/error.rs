//! Error taxonomy (§7): `NoSolution` is the only operational failure the
//! core engine itself can surface; `ParseError`/`ConfigError` live at the
//! boundaries that build a `State`/`BoardConfig` in the first place.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {expected} rows but found {actual}")]
    RowCount { expected: u16, actual: usize },

    #[error("row {row} has length {actual}, expected {expected}")]
    RowLength { row: usize, expected: u16, actual: usize },

    #[error("unrecognized character {ch:?} at row {row}, column {column}")]
    InvalidCharacter { row: usize, column: usize, ch: char },

    #[error("boat '{0}' has no front cell marked")]
    MissingFront(char),

    #[error("boat '{0}' has more than one front cell marked")]
    MultipleFronts(char),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse board configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read board configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// The only operational failure mode of the search (§4.9, §7): the frontier
/// drained without finding a solved state.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("the puzzle has no solution")]
    NoSolution,
}

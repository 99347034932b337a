//! Text-grid parsing (§6): builds the initial [`State`] the search starts
//! from. Kept out of `State` itself so the engine stays decoupled from the
//! input grammar (SPEC_FULL.md §3), grounded in the original
//! `State.from_string` implementation.

use crate::board::BoardConfig;
use crate::error::ParseError;
use crate::geometry::Position;
use crate::piece::{Cells, Piece};
use crate::state::State;

const GAP: char = '-';
const BLOCK: char = '#';

/// Parses the text grammar from §6 into a [`State`].
///
/// Leading and trailing blank lines are stripped; what remains must be
/// exactly `config.height` lines of exactly `config.width` characters, each
/// drawn from `-`, `#`, or a boat letter (uppercase for a non-front cell,
/// lowercase for the one front cell every boat must have).
pub fn parse_state(text: &str, config: &BoardConfig) -> Result<State, ParseError> {
    let lines: Vec<&str> = text.trim_matches(|c: char| c == '\n' || c == '\r').lines().collect();

    if lines.len() != config.height as usize {
        return Err(ParseError::RowCount { expected: config.height, actual: lines.len() });
    }

    // Preserves first-encounter order, like the dict the original parser
    // built up row by row.
    let mut boats: Vec<(char, Cells, bool)> = Vec::new();
    let mut waves: Vec<Piece> = Vec::with_capacity(lines.len());

    for (row, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != config.width as usize {
            return Err(ParseError::RowLength { row, expected: config.width, actual: chars.len() });
        }

        let mut wave_cells = Cells::new();

        for (column, &ch) in chars.iter().enumerate() {
            let position = Position::new(row as i32, column as i32);

            if ch == BLOCK {
                wave_cells.push(position);
            } else if ch == GAP {
                // empty cell, nothing to record
            } else if ch.is_ascii_alphabetic() {
                let id = ch.to_ascii_uppercase();
                let is_front = ch.is_ascii_lowercase();

                match boats.iter_mut().find(|(existing, _, _)| *existing == id) {
                    Some((_, cells, seen_front)) => {
                        if is_front {
                            if *seen_front {
                                return Err(ParseError::MultipleFronts(id));
                            }
                            cells.insert(0, position);
                            *seen_front = true;
                        } else {
                            cells.push(position);
                        }
                    }
                    None => {
                        let mut cells = Cells::new();
                        cells.push(position);
                        boats.push((id, cells, is_front));
                    }
                }
            } else {
                return Err(ParseError::InvalidCharacter { row, column, ch });
            }
        }

        waves.push(Piece::Wave { row: row as u16 + 1, cells: wave_cells });
    }

    let mut pieces = waves;
    for (id, cells, seen_front) in boats {
        if !seen_front {
            return Err(ParseError::MissingFront(id));
        }
        pieces.push(Piece::Boat { id, cells });
    }

    Ok(State::new(pieces, *config))
}

//! Puzzle-specific board constants (§6): not hard-coded into the engine.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Position;

/// The board's dimensions and the red boat's goal cells.
///
/// Small and `Copy`, so it can be carried by value alongside a [`State`]
/// without complicating its lifetime.
///
/// [`State`]: crate::state::State
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub height: u16,
    pub width: u16,
    /// The red boat's front cell once solved.
    pub port_front: Position,
    /// The red boat's back cell once solved.
    pub port_back: Position,
}

impl Default for BoardConfig {
    /// The reference puzzle board: 8 rows by 9 columns, port at
    /// front=(7,5), back=(6,5) (§6).
    fn default() -> Self {
        BoardConfig {
            height: 8,
            width: 9,
            port_front: Position::new(7, 5),
            port_back: Position::new(6, 5),
        }
    }
}

impl BoardConfig {
    /// Load a board configuration from a JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<BoardConfig, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn cell_count(&self) -> usize {
        self.height as usize * self.width as usize
    }
}

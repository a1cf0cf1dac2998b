//! The 3x3 grid.

use crate::action::MoveError;
use crate::position::Position;
use crate::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells only move from empty to a marker; the one way back is
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `marker` at `index` if that cell is empty.
    ///
    /// Returns `Ok(true)` when the marker was placed and `Ok(false)` when
    /// the cell was already taken, in which case nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] for indices outside 0-8.
    #[instrument(skip(self))]
    pub fn place_marker(&mut self, marker: Marker, index: usize) -> Result<bool, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        Ok(self.place(marker, position))
    }

    /// Places `marker` at `position` if that cell is empty.
    pub fn place(&mut self, marker: Marker, position: Position) -> bool {
        let cell = &mut self.cells[position.to_index()];
        if !cell.is_empty() {
            debug!(%position, "Cell already occupied");
            return false;
        }
        *cell = Cell::Occupied(marker);
        true
    }

    /// Gets the cell at the given position.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_empty()
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Positions still open for play.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Returns an owned copy of all cells.
    pub fn snapshot(&self) -> [Cell; 9] {
        self.cells
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Formats the board as text, showing the index of each open cell.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => result.push_str(&index.to_string()),
                    Cell::Occupied(marker) => result.push(marker.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Marker a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (opens a fresh game).
    X,
    /// Marker O.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Single-character symbol used for rendering and name fallback.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended with three in a row for this marker.
    Won(Marker),
    /// All nine cells filled with no winner.
    Draw,
}

impl GameStatus {
    /// Checks if the status is terminal.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
        assert_eq!(Marker::X.opponent().opponent(), Marker::X);
    }

    #[test]
    fn test_status_is_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won(Marker::O).is_over());
        assert!(GameStatus::Draw.is_over());
    }
}

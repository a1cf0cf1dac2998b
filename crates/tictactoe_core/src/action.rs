//! Move outcomes and move rejection reasons.

use crate::position::Position;
use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The round continues; the other player is now to move.
    Continue,
    /// The mover completed a line and won; the mover stays current.
    Won(Marker),
    /// The move filled the last cell with no winner.
    Draw,
}

impl MoveOutcome {
    /// Checks if the move ended the round.
    pub fn ends_round(self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}

/// Why a move was rejected.
///
/// Every variant is recoverable: a rejected move leaves the board, the
/// turn count and the current player untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell (valid range is 0-8).
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The cell already holds a marker.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

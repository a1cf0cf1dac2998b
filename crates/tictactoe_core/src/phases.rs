//! Outcome of a finished round.

use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// How a finished round ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner {
        /// Winner's normalised name.
        name: String,
        /// Winner's marker.
        marker: Marker,
    },
    /// The board filled with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner's name if there is one.
    pub fn winner_name(&self) -> Option<&str> {
        match self {
            Outcome::Winner { name, .. } => Some(name),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { name, marker } => write!(f, "{} ({}) wins!", name, marker),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

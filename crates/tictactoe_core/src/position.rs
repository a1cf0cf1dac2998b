//! Named board positions and their row-major index mapping.

use crate::board::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions map 1:1 to row-major cell indices: 0, 1, 2 form the top row
/// and 6, 7, 8 the bottom row. This mapping is the only wire format a
/// front end needs to honour.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses an index (`"4"`) or a label (`"center"`, `"top-left"`).
    ///
    /// Labels match case-insensitively and ignore spaces, dashes and
    /// underscores, so `"Bottom Right"` and `"bottom_right"` both resolve.
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }

        let wanted = squash(s);
        if wanted.is_empty() {
            return None;
        }
        <Position as strum::IntoEnumIterator>::iter().find(|pos| squash(pos.label()) == wanted)
    }

    /// Positions whose cells are still empty on `board`, in index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping_is_row_major() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::TopRight.to_index(), 2);
        assert_eq!(Position::MiddleLeft.to_index(), 3);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::BottomRight.to_index(), 8);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_index_and_label() {
        assert_eq!(Position::parse("0"), Some(Position::TopLeft));
        assert_eq!(Position::parse(" 8 "), Some(Position::BottomRight));
        assert_eq!(Position::parse("9"), None);
        assert_eq!(Position::parse("center"), Some(Position::Center));
        assert_eq!(Position::parse("Bottom Right"), Some(Position::BottomRight));
        assert_eq!(Position::parse("top_left"), Some(Position::TopLeft));
        assert_eq!(Position::parse("middle"), None);
        assert_eq!(Position::parse(""), None);
    }
}

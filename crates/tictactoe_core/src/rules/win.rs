//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Cell, Marker};
use tracing::instrument;

/// The 8 lines that win when uniformly marked.
pub const WINNING_COMBOS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first winning line on the board and its marker.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Marker, [Position; 3])> {
    WINNING_COMBOS.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        match cell {
            Cell::Occupied(marker) if cell == board.get(b) && cell == board.get(c) => {
                Some((marker, [a, b, c]))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` if a marker holds three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Marker> {
    winning_line(board).map(|(marker, _)| marker)
}

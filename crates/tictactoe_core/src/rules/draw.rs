//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::board::Board;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Marker;

    fn fill(marks: [Marker; 9]) -> Board {
        let mut board = Board::new();
        for (index, marker) in marks.into_iter().enumerate() {
            board.place_marker(marker, index).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        use Marker::{O, X};
        // X X O / O O X / X O X
        let board = fill([X, X, O, O, O, X, X, O, X]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Marker::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

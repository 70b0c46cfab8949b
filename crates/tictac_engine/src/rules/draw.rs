//! Draw detection logic for tic-tac-toe.

use super::win::completed_line;
use crate::types::Board;

/// A draw is a full board with no completed line.
///
/// The engine checks for a win first and only then asks whether the board is
/// full; this function combines both for callers holding a bare board.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && completed_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    const X: Cell = Cell::MarkedX;
    const O: Cell = Cell::MarkedO;
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_rows([[X, O, X], [O, X, E], [O, X, O]]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}

//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cells).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::winner;
    use super::*;
    use crate::Mark;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.apply_move(5, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for n in 1..=9 {
            board.apply_move(n, Mark::X);
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        for (n, mark) in [
            (1, Mark::X),
            (2, Mark::O),
            (3, Mark::X),
            (4, Mark::X),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::O),
            (8, Mark::X),
            (9, Mark::X),
        ] {
            board.apply_move(n, mark);
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for n in [1, 2, 3] {
            board.apply_move(n, Mark::X);
        }
        board.apply_move(4, Mark::O);
        board.apply_move(5, Mark::O);
        assert!(!is_draw(&board));
    }
}

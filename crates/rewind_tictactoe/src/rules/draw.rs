//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::winning_line;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winning line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        let board = Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |board, (&pos, player)| board.with_mark(pos, player));

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let board = Position::ALL
            .iter()
            .fold(Board::new(), |board, &pos| board.with_mark(pos, Player::X));
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
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

/// A completed line and the player who holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player occupying all three cells.
    pub player: Player,
    /// The three positions, in line order.
    pub line: [Position; 3],
}

impl WinningLine {
    /// Checks if a position is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }

    /// The line as raw board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Finds the first line held entirely by one player.
///
/// Lines are scanned in [`LINES`] order, so a board with two completed
/// lines always reports the same one.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        let cell = board.cell(a);
        if let Cell::Occupied(player) = cell
            && cell == board.cell(b)
            && cell == board.cell(c)
        {
            return Some(WinningLine { player, line });
        }
    }

    None
}

/// Returns `Some(player)` if the player has three in a row.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|w| w.player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, player)| board.with_mark(pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(winner(&board), Some(Player::O));
        assert_eq!(winning_line(&board).unwrap().indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Player::X), (Position::TopCenter, Player::X)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete; the row is checked first.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(winning_line(&board).unwrap().indices(), [0, 1, 2]);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = line
                .iter()
                .fold(Board::new(), |board, &pos| board.with_mark(pos, Player::O));
            let found = winning_line(&board).unwrap();
            assert_eq!(found.line, line);
            assert!(line.iter().all(|&pos| found.contains(pos)));
        }
    }
}

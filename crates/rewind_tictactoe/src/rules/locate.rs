//! Locating the cell a move changed.

use super::super::{Board, Position};
use tracing::instrument;

/// Returns the first position whose cell differs between two snapshots.
///
/// Consecutive history snapshots differ in exactly one cell, so this is
/// the cell the move filled. Identical snapshots mean the history is
/// corrupt; debug builds panic, release builds return `None`.
#[instrument]
pub fn first_differing_cell(prev: &Board, next: &Board) -> Option<Position> {
    let found = Position::ALL
        .iter()
        .copied()
        .find(|&pos| prev.cell(pos) != next.cell(pos));

    debug_assert!(found.is_some(), "consecutive snapshots must differ in one cell");
    found
}

/// Formats a position as a 1-based `(row, col)` string.
#[instrument]
pub fn format_coordinate(pos: Position) -> String {
    pos.coordinate().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_finds_changed_cell() {
        let prev = Board::new().with_mark(Position::TopLeft, Player::X);
        let next = prev.with_mark(Position::BottomCenter, Player::O);
        assert_eq!(first_differing_cell(&prev, &next), Some(Position::BottomCenter));
    }

    #[test]
    fn test_scans_in_index_order() {
        let prev = Board::new();
        let next = prev
            .with_mark(Position::BottomRight, Player::X)
            .with_mark(Position::TopCenter, Player::O);
        assert_eq!(first_differing_cell(&prev, &next), Some(Position::TopCenter));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "consecutive snapshots must differ")]
    fn test_identical_snapshots_panic_in_debug() {
        let board = Board::new();
        first_differing_cell(&board, &board);
    }

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(Position::TopLeft), "(1, 1)");
        assert_eq!(format_coordinate(Position::Center), "(2, 2)");
        assert_eq!(format_coordinate(Position::TopRight), "(1, 3)");
        assert_eq!(format_coordinate(Position::BottomLeft), "(3, 1)");
    }
}

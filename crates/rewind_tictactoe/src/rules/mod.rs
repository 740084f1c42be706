//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board snapshots.
//! Rules never see the history; [`GameState`](crate::GameState) feeds them
//! whichever snapshot is current.

pub mod draw;
pub mod locate;
pub mod win;

pub use draw::{is_draw, is_full};
pub use locate::{first_differing_cell, format_coordinate};
pub use win::{LINES, WinningLine, winner, winning_line};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Checks if no further moves are accepted.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Classifies a snapshot as in progress, won, or drawn.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_status_in_progress() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(status(&board), GameStatus::InProgress);
        assert!(!status(&board).is_over());
    }

    #[test]
    fn test_status_won() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::MiddleLeft, Player::O)
            .with_mark(Position::BottomLeft, Player::O);
        assert_eq!(status(&board), GameStatus::Won(Player::O));
        assert!(status(&board).is_over());
    }
}

//! Structural invariants: empty origin and a valid step pointer.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: history starts with the empty board.
pub struct EmptyOrigin;

impl Invariant<GameState> for EmptyOrigin {
    fn holds(game: &GameState) -> bool {
        game.history()
            .first()
            .is_some_and(|entry| *entry.board() == Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// Invariant: entries are numbered by position and the pointer is in range.
pub struct StepInBounds;

impl Invariant<GameState> for StepInBounds {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        history
            .iter()
            .enumerate()
            .all(|(index, entry)| *entry.step() == index)
            && game.step_number() < history.len()
    }

    fn description() -> &'static str {
        "Step pointer is within history and entries are numbered in order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        let game = GameState::new();
        assert!(EmptyOrigin::holds(&game));
        assert!(StepInBounds::holds(&game));
    }

    #[test]
    fn test_pointer_stays_in_bounds_after_jump() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.jump_to(0);
        assert!(StepInBounds::holds(&game));
    }

    #[test]
    fn test_marked_origin_violates() {
        let mut game = GameState::new();
        game.history[0].board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!EmptyOrigin::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!EmptyOrigin::holds(&game));
        assert!(!StepInBounds::holds(&game));
    }

    #[test]
    fn test_misnumbered_entry_violates() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.history[1].step = 5;
        assert!(!StepInBounds::holds(&game));
    }
}

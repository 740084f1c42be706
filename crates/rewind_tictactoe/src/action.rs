//! First-class move type.
//!
//! A move is the domain event that turns one snapshot into the next. It
//! is never stored; history keeps snapshots, and the move is recovered by
//! comparing neighbours.

use super::{Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mov = Move::new(Player::O, Position::Center);
        assert_eq!(mov.to_string(), "O -> Center");
    }

    #[test]
    fn test_recovered_from_history() {
        let mut game = crate::GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);

        let mov = game.move_at(2).unwrap();
        assert_eq!(mov.player, Player::O);
        assert_eq!(mov.position, Position::TopLeft);
    }
}

//! Decided board invariant: nothing is played after a win.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: only the last history entry may hold a winning line.
pub struct NoPlayAfterDecision;

impl Invariant<GameState> for NoPlayAfterDecision {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let settled = history.len().saturating_sub(1);

        history[..settled]
            .iter()
            .all(|entry| rules::winner(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No move follows a won board"
    }
}

//! Alternating marks invariant: the mark placed at each step matches parity.

use super::super::{GameState, Player, Position};
use super::Invariant;

/// Invariant: X fills the cell leaving an even step, O leaving an odd one.
///
/// Together with [`SingleCellDelta`](super::SingleCellDelta) this means
/// the derived turn always matches the marks on the board.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let mover = Player::for_step(*prev.step());

            Position::ALL
                .iter()
                .find(|&&pos| prev.board().cell(pos) != next.board().cell(pos))
                .is_some_and(|&pos| next.board().cell(pos).player() == Some(mover))
        })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}

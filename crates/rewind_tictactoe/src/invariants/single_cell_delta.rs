//! Single-cell delta invariant: each step fills exactly one empty cell.

use super::super::{GameState, Position};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one cell.
///
/// The differing cell is empty before the step and occupied after it, so
/// marks are never overwritten or erased.
pub struct SingleCellDelta;

impl Invariant<GameState> for SingleCellDelta {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (prev, next) = (pair[0].board(), pair[1].board());
            let mut changed = Position::ALL
                .iter()
                .filter(|&&pos| prev.cell(pos) != next.cell(pos));

            match (changed.next(), changed.next()) {
                (Some(&pos), None) => prev.is_empty(pos) && !next.is_empty(pos),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ in exactly one newly filled cell"
    }
}

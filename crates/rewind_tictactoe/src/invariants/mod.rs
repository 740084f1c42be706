//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold for every
//! [`GameState`](crate::GameState) the public API can produce. They are
//! checked after each applied move in debug builds and can be tested
//! independently.

mod alternating_marks;
mod decided;
mod origin;
mod single_cell_delta;

pub use alternating_marks::AlternatingMarks;
pub use decided::NoPlayAfterDecision;
pub use origin::{EmptyOrigin, StepInBounds};
pub use single_cell_delta::SingleCellDelta;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

/// Every history invariant as a composable set.
pub type HistoryInvariants = (
    EmptyOrigin,
    StepInBounds,
    SingleCellDelta,
    AlternatingMarks,
    NoPlayAfterDecision,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = GameState::new();
        game.apply_move(Position::TopLeft);
        game.apply_move(Position::Center);
        game.apply_move(Position::TopRight);
        game.jump_to(1);
        game.apply_move(Position::BottomLeft);

        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);

        // Overwrite the origin with a mark and point past the end.
        game.history[0].board = game.history[0].board.with_mark(Position::TopLeft, Player::O);
        game.step_number = 7;

        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.to_string()).collect();
        assert!(descriptions.contains(&EmptyOrigin::description().to_string()));
        assert!(descriptions.contains(&StepInBounds::description().to_string()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::new();

        type TwoInvariants = (EmptyOrigin, SingleCellDelta);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}

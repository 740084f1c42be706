//! Boundary errors for the history model.

use derive_more::{Display, Error};

/// Caller contract violations caught at the public boundary.
///
/// Clicking an occupied cell or playing on a decided board is not an
/// error; those moves are ignored and reported through
/// [`MoveOutcome`](crate::MoveOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RewindError {
    /// Cell index outside 0-8.
    #[display("Cell index {} out of bounds (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// Jump target outside the recorded history.
    #[display("Step {step} out of bounds (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
}

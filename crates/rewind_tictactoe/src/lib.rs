//! Rewind - tic-tac-toe with a branching move history.
//!
//! The crate keeps the game rules separate from the history model so a
//! presentation layer can render any point in the game without touching
//! either.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] snapshot (winner, winning
//!   line, draw, changed cell, coordinates)
//! - **History**: [`GameState`] owns the snapshots, the current step, and
//!   derives whose turn it is from step parity
//! - **Invariants**: first-class properties of the history, checked after
//!   every applied move in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Position};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::TopLeft);
//! game.apply_move(Position::Center);
//! assert_eq!(game.next_player(), Player::X);
//!
//! game.jump_to(1);
//! assert_eq!(game.next_player(), Player::O);
//! assert_eq!(game.move_descriptions()[1], "Go to move #1 (1, 1)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use error::RewindError;
pub use history::{GameState, HistoryEntry, IgnoreReason, MoveOutcome};
pub use invariants::{
    AlternatingMarks, EmptyOrigin, HistoryInvariants, Invariant, InvariantSet,
    InvariantViolation, NoPlayAfterDecision, SingleCellDelta, StepInBounds,
};
pub use position::{Coordinate, Position};
pub use rules::{GameStatus, WinningLine};
pub use types::{Board, Cell, Player};

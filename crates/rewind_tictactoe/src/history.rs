//! Branching move history.
//!
//! [`GameState`] keeps every snapshot the game has passed through and a
//! pointer to the one on display. Jumping moves the pointer only; the
//! next applied move discards everything after the pointer and appends.

use super::action::Move;
use super::error::RewindError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{self, GameStatus, WinningLine};
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One snapshot in history, tagged with its step number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct HistoryEntry {
    /// Position in history; 0 is the empty board.
    pub(crate) step: usize,
    /// Board as it stood after `step` moves.
    pub(crate) board: Board,
}

/// Result of asking for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was placed and history advanced by one step.
    Applied(Move),
    /// The move was ignored and nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Checks if the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The displayed board already has a winner.
    #[display("{} has already won", _0)]
    AlreadyWon(Player),
}

/// Game history with a movable step pointer.
///
/// Whose turn it is never gets stored: X moves from even steps, O from
/// odd ones, so the turn can't drift out of sync with the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step_number: usize,
}

impl GameState {
    /// Creates a new game holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                step: 0,
                board: Board::new(),
            }],
            step_number: 0,
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Moves onto an occupied cell or a board that already has a winner
    /// are ignored. Otherwise any history past the current step is
    /// discarded before the new snapshot is appended.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.next_player()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let current = *self.current_board();

        if let Some(player) = rules::winner(&current) {
            debug!(winner = %player, "Ignoring move on decided board");
            return MoveOutcome::Ignored(IgnoreReason::AlreadyWon(player));
        }

        if !current.is_empty(pos) {
            debug!("Ignoring move on occupied cell");
            return MoveOutcome::Ignored(IgnoreReason::Occupied(pos));
        }

        let player = self.next_player();
        let step = self.step_number + 1;
        let entry = HistoryEntry {
            step,
            board: current.with_mark(pos, player),
        };

        let discarded = self.history.len() - step;
        if discarded > 0 {
            debug!(discarded, "Discarding future history");
        }

        self.history = self.history[..step]
            .iter()
            .copied()
            .chain(std::iter::once(entry))
            .collect();
        self.step_number = step;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated: {:?}",
            HistoryInvariants::check_all(self)
        );

        let mov = Move::new(player, pos);
        info!(%mov, step, "Move applied");
        MoveOutcome::Applied(mov)
    }

    /// Places a mark by raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`RewindError::CellOutOfRange`] for an index past the board.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<MoveOutcome, RewindError> {
        let pos = Position::try_from(index)?;
        Ok(self.apply_move(pos))
    }

    /// Moves the step pointer to `step` without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not a recorded step. Use [`Self::try_jump_to`]
    /// when the target comes from outside.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump target {step} out of bounds (history has {} entries)",
            self.history.len()
        );

        if step == self.step_number {
            return;
        }

        debug!(to = step, "Jumping");
        self.step_number = step;
    }

    /// Bounds-checked [`Self::jump_to`].
    ///
    /// # Errors
    ///
    /// Returns [`RewindError::StepOutOfRange`] if `step` is not recorded.
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, step: usize) -> Result<(), RewindError> {
        let len = self.history.len();
        if step >= len {
            return Err(RewindError::StepOutOfRange { step, len });
        }
        self.jump_to(step);
        Ok(())
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// The displayed history entry.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.step_number]
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.current_entry().board
    }

    /// Whose turn it is at the displayed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Winner of the displayed snapshot.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self.current_board())
    }

    /// Winning line of the displayed snapshot, for highlighting.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self.current_board())
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current_board())
    }

    /// Checks if the displayed snapshot is a draw.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// The move that produced `step`, or `None` for step 0 and unknown steps.
    #[instrument(skip(self))]
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let prev = self.history.get(step.checked_sub(1)?)?;
        let next = self.history.get(step)?;
        rules::first_differing_cell(&prev.board, &next.board)
            .map(|pos| Move::new(Player::for_step(prev.step), pos))
    }

    /// The move that produced the displayed snapshot.
    pub fn last_move(&self) -> Option<Move> {
        self.move_at(self.step_number)
    }

    /// Describes one history entry, e.g. `Go to move #3 (1, 2)`.
    ///
    /// Returns `None` for an unrecorded step.
    #[instrument(skip(self))]
    pub fn move_description(&self, step: usize) -> Option<String> {
        if step >= self.history.len() {
            return None;
        }
        if step == 0 {
            return Some("Go to game start".to_string());
        }

        let mut desc = format!("Go to move #{step}");
        if let Some(mov) = self.move_at(step) {
            desc.push(' ');
            desc.push_str(&rules::format_coordinate(mov.position));
        }
        Some(desc)
    }

    /// One description per history entry, oldest first.
    pub fn move_descriptions(&self) -> Vec<String> {
        (0..self.history.len())
            .filter_map(|step| self.move_description(step))
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

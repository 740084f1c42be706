//! Application state and key handling.

use crate::config::HistoryOrder;
use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, GameStatus, MoveOutcome, Position};
use tracing::{debug, info, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move through the move list.
    History,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// One row of the move list, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// Step the row jumps to.
    pub step: usize,
    /// Description text.
    pub label: String,
    /// The row is the displayed step.
    pub current: bool,
    /// The row is under the list cursor.
    pub selected: bool,
}

/// Main application state.
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    order: HistoryOrder,
    selected: usize,
    status_message: String,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            order,
            selected: 0,
            status_message: "Press 1-9 or Enter to place a mark.".to_string(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move list order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Status line for the displayed board.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Won(player) => format!("Winner: {}", player),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.game.next_player()),
        }
    }

    /// Move list rows in display order.
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        let current = self.game.step_number();
        let rows = self
            .game
            .move_descriptions()
            .into_iter()
            .enumerate()
            .map(|(step, label)| HistoryRow {
                step,
                label,
                current: step == current,
                selected: self.focus == Focus::History && step == self.selected,
            })
            .collect();
        self.order.arrange(rows)
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char('s') => {
                self.order = self.order.toggle();
                debug!(order = ?self.order, "Toggled move list order");
            }
            KeyCode::Tab => self.toggle_focus(),
            code => {
                if let Some(pos) = digit_cell(code) {
                    self.cursor = pos;
                    self.activate(pos);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::History => self.handle_history_key(code),
                    }
                }
            }
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.game.history().len() - 1;
        // Up moves toward the top row, whichever step that is.
        let (toward_start, toward_end) = match self.order {
            HistoryOrder::Ascending => (KeyCode::Up, KeyCode::Down),
            HistoryOrder::Descending => (KeyCode::Down, KeyCode::Up),
        };

        if code == toward_start {
            self.selected = self.selected.saturating_sub(1);
        } else if code == toward_end {
            self.selected = (self.selected + 1).min(last);
        } else if code == KeyCode::Enter {
            self.jump(self.selected);
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.game.step_number();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    /// Places the next mark at `pos`.
    #[instrument(skip(self))]
    fn activate(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            MoveOutcome::Applied(mov) => {
                self.status_message = format!("{} played {}", mov.player, mov.position);
            }
            MoveOutcome::Ignored(reason) => {
                debug!(%reason, "Move ignored");
                self.status_message = format!("Ignored: {}", reason);
            }
        }
        self.selected = self.game.step_number();
    }

    /// Shows an earlier (or later) step.
    #[instrument(skip(self))]
    fn jump(&mut self, step: usize) {
        match self.game.try_jump_to(step) {
            Ok(()) => {
                self.status_message = self
                    .game
                    .move_description(step)
                    .map(|desc| desc.replacen("Go to", "Showing", 1))
                    .unwrap_or_default();
            }
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Starts a fresh game.
    pub fn restart(&mut self) {
        info!("Starting new game");
        self.game = GameState::new();
        self.selected = 0;
        self.cursor = Position::Center;
        self.status_message = "New game. X moves first.".to_string();
    }
}

//! User settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Order of the move list on screen.
///
/// Only the display changes; the game history is always oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Game start at the top.
    #[default]
    Ascending,
    /// Latest move at the top.
    Descending,
}

impl HistoryOrder {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Asc",
            Self::Descending => "Desc",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Puts chronologically ordered items into display order.
    pub fn arrange<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == Self::Descending {
            items.reverse();
        }
        items
    }
}

/// Settings for the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiSettings {
    /// Initial move list order.
    history_order: HistoryOrder,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// File the tracing output goes to.
    log_file: PathBuf,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            history_order: HistoryOrder::default(),
            log_filter: "info".to_string(),
            log_file: PathBuf::from("rewind.log"),
        }
    }
}

impl TuiSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(order = ?settings.history_order, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings, falling back to defaults when the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, descending: bool, log_file: Option<PathBuf>) -> Self {
        if descending {
            self.history_order = HistoryOrder::Descending;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

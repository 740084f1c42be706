//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can jump through
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (missing file means defaults)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,
}

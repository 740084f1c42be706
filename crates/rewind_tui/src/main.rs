//! Rewind - terminal tic-tac-toe with a jumpable move history.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::{App, AppAction};
use cli::Cli;
use config::TuiSettings;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = TuiSettings::load(&cli.config)?.with_overrides(cli.descending, cli.log_file);

    init_tracing(&settings)?;
    info!(?settings, "Starting rewind");

    let mut terminal = setup_terminal()?;

    let mut app = App::new(*settings.history_order());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Exiting rewind");
    res
}

/// Logs go to a file; stdout belongs to the terminal UI.
fn init_tracing(settings: &TuiSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("creating log file {}", settings.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Raw mode plus alternate screen. A failure after raw mode is on puts the
/// terminal back before the error propagates.
fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    undo_on_err(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

/// Runs `step`; if it fails, runs `undo` and returns the original error.
fn undo_on_err<T>(step: impl FnOnce() -> io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    step().inspect_err(|err| {
        error!(error = %err, "Terminal setup failed, restoring");
        undo();
    })
}

/// Draw, wait for a key, repeat. Each key runs to completion before the next.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == AppAction::Quit
        {
            return Ok(());
        }
    }
}

//! Terminal User Interface (TUI) for pomotimer.
//!
//! Shows the live countdown and the Start / Reset / Change Durations /
//! Analytics controls. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, DurationForm, FormField, Modal, ModalLevel};
pub use event::Action;

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::TimerError;
use crate::features::focus::{SessionConfig, SessionLog, SessionSink};

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: SessionConfig, log: SessionLog) -> Result<(), TimerError> {
    enable_raw_mode().map_err(|e| TimerError::Tui(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TimerError::Tui(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TimerError::Tui(format!("Failed to create terminal: {e}")))?;

    tracing::info!(
        work_minutes = config.work_minutes(),
        break_minutes = config.break_minutes(),
        log = %log.path().display(),
        "timer opened"
    );
    let mut app = App::new(config, log);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    tracing::info!("timer closed");
    result
}

/// Run the main application loop.
fn run_app<B: Backend, S: SessionSink>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), TimerError> {
    loop {
        app.pump(Local::now());

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TimerError::Tui(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app, POLL_INTERVAL)? {
            match action {
                Action::Quit => app.should_quit = true,
                Action::Start => app.start(Local::now())?,
                Action::Reset => app.reset(),
                Action::Analytics => app.show_analytics(),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TimerError;
use crate::features::focus::SessionSink;
use crate::tui::app::App;

/// Key help shown in the status bar.
pub const HELP: &str = "s:start | r:reset | c:change durations | a:analytics | q:quit";

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start the countdown.
    Start,
    /// Reset to a full work session.
    Reset,
    /// Show the analytics chart.
    Analytics,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<S: SessionSink>(
    app: &mut App<S>,
    timeout: Duration,
) -> Result<Option<Action>, TimerError> {
    if !event::poll(timeout).map_err(|e| TimerError::Tui(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    match event::read().map_err(|e| TimerError::Tui(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key(app, key)),
        _ => Ok(None),
    }
}

/// Route one key press to whichever layer is on top.
pub fn handle_key<S: SessionSink>(app: &mut App<S>, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.modal().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_modal();
        }
        return None;
    }

    if app.form.is_some() {
        match key.code {
            KeyCode::Esc => app.cancel_duration_form(),
            KeyCode::Enter => app.submit_duration_form(),
            code => {
                if let Some(form) = app.form.as_mut() {
                    match code {
                        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                            form.toggle_focus();
                        }
                        KeyCode::Backspace => form.backspace(),
                        KeyCode::Char(c) => form.push(c),
                        _ => {}
                    }
                }
            }
        }
        return None;
    }

    if app.chart.is_some() {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('a' | 'q')
        ) {
            app.close_chart();
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') | KeyCode::Enter => Some(Action::Start),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('c') => {
            app.open_duration_form();
            None
        }
        KeyCode::Char('a') => Some(Action::Analytics),
        KeyCode::Char('?') => {
            app.status = Some(HELP.to_string());
            None
        }
        _ => None,
    }
}

//! Application state for the TUI.
//!
//! [`App`] is the only owner of the [`SessionTimer`]. Ticks arrive from a
//! [`Ticker`] over a channel and are applied here, on the UI thread.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::error::TimerError;
use crate::features::analytics::{NO_LOG_MESSAGE, NO_SESSIONS_MESSAGE};
use crate::features::focus::{
    CompletedSession, SessionConfig, SessionLog, SessionSink, SessionTimer, Summary, Ticker,
};

/// Severity of a modal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalLevel {
    /// Informational acknowledgement
    Info,
    /// Something went wrong
    Error,
}

/// A message the user must acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    /// Dialog title
    pub title: String,
    /// Dialog body
    pub message: String,
    /// Severity
    pub level: ModalLevel,
}

impl Modal {
    fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            level: ModalLevel::Info,
        }
    }

    fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            level: ModalLevel::Error,
        }
    }
}

/// Which field of the duration form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Work minutes
    Work,
    /// Break minutes
    Break,
}

/// The Change Durations dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationForm {
    /// Work minutes as typed
    pub work: String,
    /// Break minutes as typed
    pub brk: String,
    /// Focused field
    pub focus: FormField,
}

impl DurationForm {
    fn prefilled(config: &SessionConfig) -> Self {
        Self {
            work: config.work_minutes().to_string(),
            brk: config.break_minutes().to_string(),
            focus: FormField::Work,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Work => &mut self.work,
            FormField::Break => &mut self.brk,
        }
    }

    /// Move focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Work => FormField::Break,
            FormField::Break => FormField::Work,
        };
    }

    /// Type a character into the focused field.
    pub fn push(&mut self, c: char) {
        self.field_mut().push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }
}

/// Application state.
pub struct App<S: SessionSink = SessionLog> {
    timer: SessionTimer,
    ticker: Option<Ticker>,
    tick_period: Duration,
    sink: S,
    log: SessionLog,
    /// Pending messages, front is shown.
    pub modals: VecDeque<Modal>,
    /// Open Change Durations dialog.
    pub form: Option<DurationForm>,
    /// Totals shown in the analytics overlay.
    pub chart: Option<Summary>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App<SessionLog> {
    /// Create an app that logs to and reads from `log`.
    #[must_use]
    pub fn new(config: SessionConfig, log: SessionLog) -> Self {
        Self::with_sink(config, log.clone(), log)
    }
}

impl<S: SessionSink> App<S> {
    /// Create an app with a separate sink for completed sessions.
    #[must_use]
    pub fn with_sink(config: SessionConfig, log: SessionLog, sink: S) -> Self {
        Self {
            timer: SessionTimer::new(config),
            ticker: None,
            tick_period: Duration::from_secs(1),
            sink,
            log,
            modals: VecDeque::new(),
            form: None,
            chart: None,
            status: Some("Press s to start, ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Override the ticker period.
    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// The timer being displayed.
    #[must_use]
    pub const fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    /// The modal currently on screen, if any.
    #[must_use]
    pub fn modal(&self) -> Option<&Modal> {
        self.modals.front()
    }

    /// Dismiss the modal currently on screen.
    pub fn dismiss_modal(&mut self) {
        self.modals.pop_front();
    }

    /// Start the countdown if it is not already running.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker thread cannot be spawned.
    pub fn start(&mut self, now: DateTime<Local>) -> Result<(), TimerError> {
        if self.timer.is_running() {
            return Ok(());
        }

        let ticker = Ticker::spawn(self.tick_period)?;
        self.timer.start(now);
        self.ticker = Some(ticker);
        self.status = Some(format!("{} session running", self.timer.current_kind()));
        Ok(())
    }

    /// Stop the countdown and go back to a full work session.
    pub fn reset(&mut self) {
        self.stop_ticker();
        self.timer.reset();
        self.status = Some("Timer reset".to_string());
    }

    /// Apply every tick that has arrived since the last call.
    pub fn pump(&mut self, now: DateTime<Local>) {
        let ticks = self.ticker.as_ref().map_or(0, Ticker::drain);
        for _ in 0..ticks {
            self.on_tick(now);
        }
    }

    /// Apply one tick.
    pub fn on_tick(&mut self, now: DateTime<Local>) {
        if let Some(completed) = self.timer.tick(now) {
            self.stop_ticker();
            self.finish_session(&completed);
        }
    }

    fn finish_session(&mut self, completed: &CompletedSession) {
        let record = completed.to_record();
        if let Err(e) = self.sink.append(&record) {
            tracing::warn!(kind = %record.kind, "failed to log session: {e}");
            self.modals
                .push_back(Modal::error("Error", "Could not write to log file."));
        }

        self.modals
            .push_back(Modal::info("Session Complete", completed.completion_message()));
        self.status = Some(format!(
            "Next up: {} ({})",
            self.timer.current_kind(),
            self.timer.format_remaining()
        ));
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    /// Open the Change Durations dialog prefilled with the current values.
    pub fn open_duration_form(&mut self) {
        self.form = Some(DurationForm::prefilled(self.timer.config()));
    }

    /// Close the dialog without applying it.
    pub fn cancel_duration_form(&mut self) {
        self.form = None;
    }

    /// Validate and apply the dialog.
    ///
    /// On invalid input the dialog stays open, an error is shown and the
    /// timer is left untouched.
    pub fn submit_duration_form(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };

        match SessionConfig::parse(&form.work, &form.brk) {
            Ok(config) => {
                self.timer.reconfigure(config);
                self.form = None;
                self.status = Some(format!(
                    "Durations set: {} min work / {} min break",
                    config.work_minutes(),
                    config.break_minutes()
                ));
            }
            Err(e) => {
                tracing::debug!("rejected durations: {e}");
                self.modals.push_back(Modal::error(
                    "Invalid Input",
                    "Please enter positive whole numbers of minutes for both durations.",
                ));
            }
        }
    }

    /// Load totals from the log and show them, or explain why there are none.
    pub fn show_analytics(&mut self) {
        if !self.log.exists() {
            self.modals.push_back(Modal::info("No Data", NO_LOG_MESSAGE));
            return;
        }

        match self.log.summarize() {
            Ok(summary) if summary.is_empty() => {
                self.modals
                    .push_back(Modal::info("No Data", NO_SESSIONS_MESSAGE));
            }
            Ok(summary) => {
                if summary.skipped_lines > 0 {
                    self.status = Some(format!(
                        "Skipped {} unreadable log line(s)",
                        summary.skipped_lines
                    ));
                }
                self.chart = Some(summary);
            }
            Err(e) => self
                .modals
                .push_back(Modal::error("Error", format!("Could not read log file: {e}"))),
        }
    }

    /// Close the analytics overlay.
    pub fn close_chart(&mut self) {
        self.chart = None;
    }
}

impl<S: SessionSink> Drop for App<S> {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

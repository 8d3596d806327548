//! The work/break session timer.
//!
//! [`SessionTimer`] is a plain state machine: it never sleeps or spawns
//! anything. Whoever owns it feeds it one [`SessionTimer::tick`] per second
//! (see [`super::ticker::Ticker`]).

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use super::session::{CompletedSession, SessionKind};
use crate::error::TimerError;

/// Default work session length in minutes.
pub const DEFAULT_WORK_MINUTES: u32 = 25;
/// Default break session length in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Configured session durations, in seconds. Both are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    work_seconds: u32,
    break_seconds: u32,
}

impl SessionConfig {
    /// Build a config from whole minutes.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidInput` if either value is zero or too large.
    pub fn from_minutes(work_minutes: u32, break_minutes: u32) -> Result<Self, TimerError> {
        Ok(Self {
            work_seconds: minutes_to_seconds("work", work_minutes)?,
            break_seconds: minutes_to_seconds("break", break_minutes)?,
        })
    }

    /// Build a config from raw user text, e.g. the Change Durations form.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidInput` unless both values are positive integers.
    pub fn parse(work: &str, brk: &str) -> Result<Self, TimerError> {
        Self::from_minutes(parse_minutes("work", work)?, parse_minutes("break", brk)?)
    }

    /// Work duration in seconds.
    #[must_use]
    pub const fn work_seconds(&self) -> u32 {
        self.work_seconds
    }

    /// Break duration in seconds.
    #[must_use]
    pub const fn break_seconds(&self) -> u32 {
        self.break_seconds
    }

    /// Work duration in whole minutes.
    #[must_use]
    pub const fn work_minutes(&self) -> u32 {
        self.work_seconds / 60
    }

    /// Break duration in whole minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_seconds / 60
    }

    /// Duration of a session of the given kind, in seconds.
    #[must_use]
    pub const fn seconds_for(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Work => self.work_seconds,
            SessionKind::Break => self.break_seconds,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_seconds: DEFAULT_WORK_MINUTES * 60,
            break_seconds: DEFAULT_BREAK_MINUTES * 60,
        }
    }
}

fn minutes_to_seconds(label: &str, minutes: u32) -> Result<u32, TimerError> {
    if minutes == 0 {
        return Err(TimerError::InvalidInput(format!(
            "{label} duration must be a positive number of minutes"
        )));
    }
    minutes.checked_mul(60).ok_or_else(|| {
        TimerError::InvalidInput(format!("{label} duration of {minutes} minutes is too long"))
    })
}

/// Parse a whole, positive number of minutes.
///
/// # Errors
///
/// Returns `TimerError::InvalidInput` for empty, non-integer, zero or negative input.
pub fn parse_minutes(label: &str, input: &str) -> Result<u32, TimerError> {
    let trimmed = input.trim();
    let minutes: i64 = trimmed.parse().map_err(|_| {
        TimerError::InvalidInput(format!(
            "{label} duration '{trimmed}' is not a whole number of minutes"
        ))
    })?;

    if minutes <= 0 {
        return Err(TimerError::InvalidInput(format!(
            "{label} duration must be a positive number of minutes"
        )));
    }

    u32::try_from(minutes)
        .map_err(|_| TimerError::InvalidInput(format!("{label} duration '{trimmed}' is too large")))
}

/// Snapshot of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Seconds left in the current session
    pub remaining_seconds: u32,
    /// Whether the current session is work or break
    pub current_kind: SessionKind,
    /// Whether the countdown is active
    pub running: bool,
    /// When the running session was started
    pub session_started_at: Option<DateTime<Local>>,
}

/// Work/break alternation state machine.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    config: SessionConfig,
    state: TimerState,
}

impl SessionTimer {
    /// Create an idle timer at the start of a work session.
    #[must_use]
    pub const fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: TimerState {
                remaining_seconds: config.work_seconds,
                current_kind: SessionKind::Work,
                running: false,
                session_started_at: None,
            },
        }
    }

    /// Start the countdown.
    ///
    /// Returns false, changing nothing, if the timer is already running.
    pub fn start(&mut self, now: DateTime<Local>) -> bool {
        if self.state.running {
            return false;
        }

        self.state.running = true;
        self.state.session_started_at = Some(now);
        tracing::debug!(
            kind = %self.state.current_kind,
            remaining = self.state.remaining_seconds,
            "timer started"
        );
        true
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the completed session on the tick that reaches zero. At that
    /// point the timer is already idle, toggled to the other kind and loaded
    /// with that kind's full duration.
    pub fn tick(&mut self, now: DateTime<Local>) -> Option<CompletedSession> {
        if !self.state.running {
            return None;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        if self.state.remaining_seconds > 0 {
            return None;
        }

        let kind = self.state.current_kind;
        let started_at = self.state.session_started_at.take().unwrap_or(now);
        let next = kind.toggled();

        self.state.running = false;
        self.state.current_kind = next;
        self.state.remaining_seconds = self.config.seconds_for(next);

        tracing::debug!(finished = %kind, next = %next, "session expired");
        Some(CompletedSession {
            kind,
            started_at,
            ended_at: now,
        })
    }

    /// Stop and return to the beginning of a work session.
    ///
    /// Never produces a completed session.
    pub fn reset(&mut self) {
        self.state = TimerState {
            remaining_seconds: self.config.work_seconds,
            current_kind: SessionKind::Work,
            running: false,
            session_started_at: None,
        };
        tracing::debug!("timer reset");
    }

    /// Replace the configured durations.
    ///
    /// When idle the countdown is reloaded with the new duration of the
    /// current kind. When running it keeps counting but never exceeds that
    /// duration.
    pub fn reconfigure(&mut self, config: SessionConfig) {
        self.config = config;
        let full = config.seconds_for(self.state.current_kind);

        if self.state.running {
            self.state.remaining_seconds = self.state.remaining_seconds.min(full);
        } else {
            self.state.remaining_seconds = full;
        }

        tracing::info!(
            work_minutes = config.work_minutes(),
            break_minutes = config.break_minutes(),
            "durations changed"
        );
    }

    /// Current snapshot.
    #[must_use]
    pub const fn state(&self) -> &TimerState {
        &self.state
    }

    /// Current durations.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Seconds left in the current session.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    /// Kind of the current session.
    #[must_use]
    pub const fn current_kind(&self) -> SessionKind {
        self.state.current_kind
    }

    /// Whether the countdown is active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// Fraction of the current session already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.config.seconds_for(self.state.current_kind);
        if total == 0 {
            return 1.0;
        }
        (1.0 - f64::from(self.state.remaining_seconds) / f64::from(total)).clamp(0.0, 1.0)
    }

    /// Remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.state.remaining_seconds)
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Format seconds as MM:SS. Minutes are not capped at 59.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    fn timer(work: u32, brk: u32) -> SessionTimer {
        SessionTimer::new(SessionConfig::from_minutes(work, brk).unwrap())
    }

    #[test]
    fn test_timer_new() {
        let timer = SessionTimer::default();
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert_eq!(timer.current_kind(), SessionKind::Work);
        assert!(!timer.is_running());
        assert!(timer.state().session_started_at.is_none());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut timer = timer(1, 1);
        assert!(timer.start(t0()));
        timer.tick(t0() + Duration::seconds(1));

        let before = *timer.state();
        assert!(!timer.start(t0() + Duration::seconds(5)));
        assert_eq!(*timer.state(), before);
        assert_eq!(timer.state().session_started_at, Some(t0()));
    }

    #[test]
    fn test_tick_while_idle_does_nothing() {
        let mut timer = timer(1, 1);
        assert!(timer.tick(t0()).is_none());
        assert_eq!(timer.remaining_seconds(), 60);
    }

    #[test]
    fn test_full_work_session() {
        let mut timer = timer(1, 1);
        timer.start(t0());

        for i in 1..60 {
            assert!(timer.tick(t0() + Duration::seconds(i)).is_none());
            assert!(timer.is_running());
        }

        let completed = timer.tick(t0() + Duration::seconds(60)).unwrap();
        assert_eq!(completed.kind, SessionKind::Work);
        assert!((completed.to_record().duration_minutes - 1.0).abs() < 1e-9);

        assert_eq!(timer.current_kind(), SessionKind::Break);
        assert_eq!(timer.remaining_seconds(), 60);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_exactly_one_event_per_expiry() {
        let mut timer = timer(1, 2);
        timer.start(t0());
        let events = (1..=60)
            .filter_map(|i| timer.tick(t0() + Duration::seconds(i)))
            .count();
        assert_eq!(events, 1);

        // Idle after expiry: further ticks are ignored.
        assert!(timer.tick(t0() + Duration::seconds(61)).is_none());
        assert_eq!(timer.remaining_seconds(), 120);

        // Next session continues with the break duration.
        timer.start(t0() + Duration::seconds(70));
        assert!(timer.tick(t0() + Duration::seconds(71)).is_none());
        assert_eq!(timer.remaining_seconds(), 119);
        assert_eq!(timer.current_kind(), SessionKind::Break);
    }

    #[test]
    fn test_reset() {
        let mut timer = timer(2, 1);
        timer.start(t0());
        for i in 1..=120 {
            timer.tick(t0() + Duration::seconds(i));
        }
        assert_eq!(timer.current_kind(), SessionKind::Break);

        timer.start(t0());
        timer.tick(t0() + Duration::seconds(1));
        timer.reset();

        assert!(!timer.is_running());
        assert_eq!(timer.current_kind(), SessionKind::Work);
        assert_eq!(timer.remaining_seconds(), 120);
        assert!(timer.state().session_started_at.is_none());
    }

    #[test]
    fn test_reconfigure_idle_work() {
        let mut timer = SessionTimer::default();
        for (w, b) in [(1, 1), (7, 3), (50, 10), (90, 120)] {
            timer.reconfigure(SessionConfig::from_minutes(w, b).unwrap());
            assert_eq!(timer.remaining_seconds(), w * 60);
        }
    }

    #[test]
    fn test_reconfigure_idle_break_uses_break_duration() {
        let mut timer = timer(1, 1);
        timer.start(t0());
        for i in 1..=60 {
            timer.tick(t0() + Duration::seconds(i));
        }
        timer.reconfigure(SessionConfig::from_minutes(30, 10).unwrap());
        assert_eq!(timer.remaining_seconds(), 600);
    }

    #[test]
    fn test_reconfigure_while_running_clamps() {
        let mut timer = timer(25, 5);
        timer.start(t0());
        timer.tick(t0() + Duration::seconds(1));

        timer.reconfigure(SessionConfig::from_minutes(10, 5).unwrap());
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), 600);

        timer.reconfigure(SessionConfig::from_minutes(60, 5).unwrap());
        assert_eq!(timer.remaining_seconds(), 600);
    }

    #[test]
    fn test_config_parse_rejects_bad_input() {
        assert!(matches!(
            SessionConfig::parse("abc", "5"),
            Err(TimerError::InvalidInput(_))
        ));
        assert!(SessionConfig::parse("0", "5").is_err());
        assert!(SessionConfig::parse("25", "-5").is_err());
        assert!(SessionConfig::parse("2.5", "5").is_err());
        assert!(SessionConfig::parse("", "5").is_err());

        let config = SessionConfig::parse(" 30 ", "10").unwrap();
        assert_eq!(config.work_seconds(), 1800);
        assert_eq!(config.break_seconds(), 600);
    }

    #[test]
    fn test_progress() {
        let mut timer = SessionTimer::new(SessionConfig::from_minutes(1, 1).unwrap());
        assert!(timer.progress().abs() < f64::EPSILON);
        timer.start(t0());
        for i in 1..=30 {
            timer.tick(t0() + Duration::seconds(i));
        }
        assert!((timer.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(25 * 60), "25:00");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(6000), "100:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
    }
}

//! Session kinds and completed-session records.
//!
//! A session is one contiguous Work or Break interval. When the timer for a
//! session runs out it produces a [`CompletedSession`], which becomes one
//! [`SessionRecord`] in the session log.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Timestamp layout used in the session log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Kind of session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// Focused work interval
    Work,
    /// Rest interval between work sessions
    Break,
}

impl SessionKind {
    /// The kind that follows this one.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Name as written to the session log.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }

    /// Parse a kind as stored in the session log.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidInput` for anything other than work/break.
    pub fn parse(s: &str) -> Result<Self, TimerError> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "break" => Ok(Self::Break),
            other => Err(TimerError::InvalidInput(format!(
                "unknown session kind '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Emitted once when a running session reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedSession {
    /// Kind of the session that just ended
    pub kind: SessionKind,
    /// When the user started it
    pub started_at: DateTime<Local>,
    /// When the countdown reached zero
    pub ended_at: DateTime<Local>,
}

impl CompletedSession {
    /// Convert into the record that gets persisted.
    #[must_use]
    pub fn to_record(&self) -> SessionRecord {
        let elapsed = self.ended_at.signed_duration_since(self.started_at);
        #[allow(clippy::cast_precision_loss)]
        let duration_minutes = elapsed.num_milliseconds().max(0) as f64 / 60_000.0;

        SessionRecord {
            kind: self.kind,
            started_at: self.started_at.naive_local(),
            duration_minutes,
        }
    }

    /// Message shown to the user when this session finishes.
    #[must_use]
    pub fn completion_message(&self) -> String {
        format!(
            "{} session complete! Please start the next session manually.",
            self.kind
        )
    }
}

/// One completed session as stored in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Work or break
    pub kind: SessionKind,
    /// Local wall-clock start time
    pub started_at: NaiveDateTime,
    /// Wall-clock length of the session in minutes
    pub duration_minutes: f64,
}

impl SessionRecord {
    /// Start time formatted the way the log stores it.
    #[must_use]
    pub fn started_at_string(&self) -> String {
        self.started_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Parse the three fields of a log line.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidInput` if any field is malformed.
    pub fn from_fields(kind: &str, started_at: &str, duration: &str) -> Result<Self, TimerError> {
        let kind = SessionKind::parse(kind)?;
        let started_at = NaiveDateTime::parse_from_str(started_at.trim(), TIMESTAMP_FORMAT)
            .map_err(|e| TimerError::InvalidInput(format!("bad timestamp '{started_at}': {e}")))?;
        let duration_minutes: f64 = duration
            .trim()
            .parse()
            .map_err(|_| TimerError::InvalidInput(format!("bad duration '{duration}'")))?;

        if !duration_minutes.is_finite() || duration_minutes < 0.0 {
            return Err(TimerError::InvalidInput(format!(
                "duration out of range '{duration}'"
            )));
        }

        Ok(Self {
            kind,
            started_at,
            duration_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, h, m, s).unwrap()
    }

    #[test]
    fn test_kind_toggle() {
        assert_eq!(SessionKind::Work.toggled(), SessionKind::Break);
        assert_eq!(SessionKind::Break.toggled(), SessionKind::Work);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(SessionKind::parse("Work").unwrap(), SessionKind::Work);
        assert_eq!(SessionKind::parse(" break ").unwrap(), SessionKind::Break);
        assert!(SessionKind::parse("Nap").is_err());
    }

    #[test]
    fn test_completed_to_record() {
        let started = at(9, 0, 0);
        let completed = CompletedSession {
            kind: SessionKind::Work,
            started_at: started,
            ended_at: started + Duration::seconds(90),
        };

        let record = completed.to_record();
        assert_eq!(record.kind, SessionKind::Work);
        assert_eq!(record.started_at_string(), "2026-10-19 09:00:00");
        assert!((record.duration_minutes - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_completion_message() {
        let completed = CompletedSession {
            kind: SessionKind::Break,
            started_at: at(9, 0, 0),
            ended_at: at(9, 5, 0),
        };
        assert_eq!(
            completed.completion_message(),
            "Break session complete! Please start the next session manually."
        );
    }

    #[test]
    fn test_from_fields() {
        let record = SessionRecord::from_fields("Break", "2026-10-19 10:30:00", "5.25").unwrap();
        assert_eq!(record.kind, SessionKind::Break);
        assert!((record.duration_minutes - 5.25).abs() < 1e-9);
    }

    #[test]
    fn test_from_fields_rejects_garbage() {
        assert!(SessionRecord::from_fields("Work", "yesterday", "5").is_err());
        assert!(SessionRecord::from_fields("Work", "2026-10-19 10:30:00", "five").is_err());
        assert!(SessionRecord::from_fields("Work", "2026-10-19 10:30:00", "-1").is_err());
        assert!(SessionRecord::from_fields("Work", "2026-10-19 10:30:00", "NaN").is_err());
    }
}

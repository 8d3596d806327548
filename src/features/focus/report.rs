//! Totals per session kind.

use serde::{Deserialize, Serialize};

use super::session::{SessionKind, SessionRecord};

/// Minutes accumulated per session kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Total work minutes
    pub work_minutes: f64,
    /// Total break minutes
    pub break_minutes: f64,
    /// Number of records counted
    pub sessions: usize,
    /// Log lines that could not be parsed
    pub skipped_lines: usize,
}

impl Summary {
    /// Sum a set of records.
    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a SessionRecord>) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.add(record);
        }
        summary
    }

    /// Add one record to the totals.
    pub fn add(&mut self, record: &SessionRecord) {
        match record.kind {
            SessionKind::Work => self.work_minutes += record.duration_minutes,
            SessionKind::Break => self.break_minutes += record.duration_minutes,
        }
        self.sessions += 1;
    }

    /// (kind, minutes) pairs in display order.
    #[must_use]
    pub const fn totals(&self) -> [(SessionKind, f64); 2] {
        [
            (SessionKind::Work, self.work_minutes),
            (SessionKind::Break, self.break_minutes),
        ]
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.work_minutes == 0.0 && self.break_minutes == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(kind: SessionKind, minutes: f64) -> SessionRecord {
        SessionRecord {
            kind,
            started_at: NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_records(std::iter::empty());
        assert!(summary.is_empty());
        assert_eq!(summary.sessions, 0);
    }

    #[test]
    fn test_sums_by_kind() {
        let records = vec![
            record(SessionKind::Work, 25.0),
            record(SessionKind::Break, 5.0),
            record(SessionKind::Work, 24.5),
        ];
        let summary = Summary::from_records(&records);

        assert!((summary.work_minutes - 49.5).abs() < 1e-9);
        assert!((summary.break_minutes - 5.0).abs() < 1e-9);
        assert_eq!(summary.sessions, 3);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_zero_length_sessions_count_as_empty() {
        let summary = Summary::from_records(&[record(SessionKind::Work, 0.0)]);
        assert!(summary.is_empty());
        assert_eq!(summary.sessions, 1);
    }
}

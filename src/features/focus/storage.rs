//! Session log storage.
//!
//! Completed sessions are appended to a headerless CSV file, one line per
//! session: `kind,started_at,duration_minutes`. The file is opened and closed
//! for every operation.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use super::report::Summary;
use super::session::SessionRecord;
use crate::error::TimerError;

/// Where completed sessions are written.
#[cfg_attr(test, mockall::automock)]
pub trait SessionSink {
    /// Persist one completed session.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be written.
    fn append(&self, record: &SessionRecord) -> Result<(), TimerError>;
}

/// Append-only CSV log of completed sessions.
#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    /// Create a log backed by the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists yet.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Append one record.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::Io` if the file cannot be opened or written.
    /// Nothing is buffered for a later retry.
    pub fn append(&self, record: &SessionRecord) -> Result<(), TimerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record([
            record.kind.as_str().to_string(),
            record.started_at_string(),
            // Debug keeps the fractional part: 1.0 stays "1.0".
            format!("{:?}", record.duration_minutes),
        ])
        .map_err(write_error)?;
        writer.flush()?;

        tracing::info!(
            kind = %record.kind,
            started_at = %record.started_at_string(),
            minutes = record.duration_minutes,
            "session logged"
        );
        Ok(())
    }

    /// Read every parseable record, oldest first.
    ///
    /// Returns the records and the number of lines that were skipped because
    /// they could not be parsed.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NotFound` if the log does not exist, or
    /// `TimerError::Io` if it cannot be read.
    pub fn read_all(&self) -> Result<(Vec<SessionRecord>, usize), TimerError> {
        if !self.exists() {
            return Err(TimerError::NotFound(format!(
                "session log {}",
                self.path.display()
            )));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        let mut skipped = 0;

        for (index, row) in reader.records().enumerate() {
            let line = index + 1;
            let parsed = row.map_err(TimerError::from).and_then(|row| {
                if row.len() != 3 {
                    return Err(TimerError::InvalidInput(format!(
                        "expected 3 fields, found {}",
                        row.len()
                    )));
                }
                SessionRecord::from_fields(&row[0], &row[1], &row[2])
            });

            match parsed {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(line, path = %self.path.display(), "skipping log line: {e}");
                }
            }
        }

        Ok((records, skipped))
    }

    /// Total minutes per kind. A missing log yields an empty summary.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::Io` if the log exists but cannot be read.
    pub fn summarize(&self) -> Result<Summary, TimerError> {
        match self.read_all() {
            Ok((records, skipped)) => {
                let mut summary = Summary::from_records(&records);
                summary.skipped_lines = skipped;
                Ok(summary)
            }
            Err(e) if e.is_not_found() => Ok(Summary::default()),
            Err(e) => Err(e),
        }
    }

    /// Most recent records, newest first.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NotFound` if the log does not exist.
    pub fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, TimerError> {
        let (records, _) = self.read_all()?;
        Ok(records.into_iter().rev().take(limit).collect())
    }
}

/// Writer failures are I/O failures unless csv itself rejected the record.
fn write_error(e: csv::Error) -> TimerError {
    if !e.is_io_error() {
        return TimerError::Csv(e);
    }
    match e.into_kind() {
        csv::ErrorKind::Io(io) => TimerError::Io(io),
        other => TimerError::InvalidInput(format!("session log write failed: {other:?}")),
    }
}

impl SessionSink for SessionLog {
    fn append(&self, record: &SessionRecord) -> Result<(), TimerError> {
        Self::append(self, record)
    }
}

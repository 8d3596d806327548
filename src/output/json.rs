//! JSON output formatting for pomotimer.

use serde::Serialize;
use serde_json::json;

use crate::error::TimerError;
use crate::features::focus::{SessionRecord, Summary};

/// Format session totals as JSON.
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_summary_json(summary: &Summary, log_exists: bool) -> Result<String, TimerError> {
    let output = json!({
        "log_exists": log_exists,
        "totals": {
            "Work": summary.work_minutes,
            "Break": summary.break_minutes,
        },
        "sessions": summary.sessions,
        "skipped_lines": summary.skipped_lines,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format recent sessions as JSON.
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_history_json(records: &[SessionRecord]) -> Result<String, TimerError> {
    let items: Vec<_> = records
        .iter()
        .map(|r| {
            json!({
                "kind": r.kind,
                "started_at": r.started_at_string(),
                "duration_minutes": r.duration_minutes,
            })
        })
        .collect();

    let output = json!({
        "count": records.len(),
        "items": items,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value to pretty JSON.
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TimerError> {
    Ok(serde_json::to_string_pretty(value)?)
}

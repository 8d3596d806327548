//! Output formatting for pomotimer.
//!
//! This module provides formatters for displaying session data in various formats.

mod json;
mod pretty;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::TimerError;
use crate::features::focus::{SessionRecord, Summary};

pub use json::*;
pub use pretty::*;

/// Format session totals based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_summary(
    summary: &Summary,
    log_exists: bool,
    format: OutputFormat,
) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary, log_exists)),
        OutputFormat::Json => format_summary_json(summary, log_exists),
    }
}

/// Format recent sessions based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_history(records: &[SessionRecord], format: OutputFormat) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(records)),
        OutputFormat::Json => format_history_json(records),
    }
}

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_config(
    config: &Config,
    log_path: &Path,
    format: OutputFormat,
) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, log_path)),
        OutputFormat::Json => to_json(config),
    }
}

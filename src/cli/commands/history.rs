//! History command implementation.

use crate::cli::commands::Context;
use crate::error::TimerError;
use crate::output::format_history;

/// Show the most recent completed sessions. A missing log shows as empty.
pub fn history(ctx: &Context, limit: usize) -> Result<String, TimerError> {
    let records = match ctx.log.recent(limit) {
        Ok(records) => records,
        Err(e) if e.is_not_found() => Vec::new(),
        Err(e) => return Err(e),
    };
    format_history(&records, ctx.format)
}

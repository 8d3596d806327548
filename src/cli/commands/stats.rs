//! Analytics command implementation.

use crate::cli::commands::Context;
use crate::error::TimerError;
use crate::output::format_summary;

/// Sum the session log by kind and render it.
pub fn stats(ctx: &Context) -> Result<String, TimerError> {
    let summary = ctx.log.summarize()?;
    if summary.skipped_lines > 0 {
        tracing::warn!(
            skipped = summary.skipped_lines,
            "some session log lines could not be read"
        );
    }
    format_summary(&summary, ctx.log.exists(), ctx.format)
}

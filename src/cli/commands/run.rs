//! Interactive timer command.

use crate::cli::args::RunArgs;
use crate::cli::commands::Context;
use crate::error::TimerError;
use crate::features::focus::SessionConfig;
use crate::tui;

/// Resolve durations and open the timer UI.
pub fn run(ctx: &Context, args: &RunArgs) -> Result<String, TimerError> {
    let config = session_config(ctx, args)?;
    tui::run(config, ctx.log.clone())?;
    Ok(String::new())
}

/// Durations from flags, falling back to the config file.
pub(crate) fn session_config(ctx: &Context, args: &RunArgs) -> Result<SessionConfig, TimerError> {
    SessionConfig::from_minutes(
        args.work.unwrap_or(ctx.config.timer.work_minutes),
        args.brk.unwrap_or(ctx.config.timer.break_minutes),
    )
}

//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::cli::commands::Context;
use crate::error::TimerError;
use crate::output::format_config;

/// Execute config subcommands.
pub fn config(ctx: &Context, cmd: ConfigCommands) -> Result<String, TimerError> {
    match cmd {
        ConfigCommands::Show => format_config(&ctx.config, ctx.log.path(), ctx.format),
        ConfigCommands::Path => Ok(ctx.config_path.display().to_string()),
        ConfigCommands::Set { work, brk } => set_durations(ctx, work, brk),
    }
}

fn set_durations(ctx: &Context, work: Option<u32>, brk: Option<u32>) -> Result<String, TimerError> {
    if work.is_none() && brk.is_none() {
        return Err(TimerError::InvalidInput(
            "nothing to set; pass --work and/or --break".to_string(),
        ));
    }

    let mut config = ctx.config.clone();
    if let Some(w) = work {
        config.timer.work_minutes = w;
    }
    if let Some(b) = brk {
        config.timer.break_minutes = b;
    }

    // Validate before touching the file.
    crate::features::focus::SessionConfig::from_minutes(
        config.timer.work_minutes,
        config.timer.break_minutes,
    )?;

    config.save_to_path(&ctx.config_path)?;
    tracing::info!(
        work_minutes = config.timer.work_minutes,
        break_minutes = config.timer.break_minutes,
        path = %ctx.config_path.display(),
        "saved durations"
    );

    match ctx.format {
        OutputFormat::Json => crate::output::to_json(&config.timer),
        OutputFormat::Pretty => Ok(format!(
            "{} {} min work / {} min break",
            "Saved:".green(),
            config.timer.work_minutes,
            config.timer.break_minutes
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use crate::config::{Config, Paths};
    use clap::Parser;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> Context {
        let cli = Cli::try_parse_from(["pomotimer"]).unwrap();
        Context::with_paths(&cli, Paths::with_root(dir.path().to_path_buf())).unwrap()
    }

    #[test]
    fn test_set_saves_durations() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        config(&ctx, ConfigCommands::Set { work: Some(40), brk: None }).unwrap();

        let saved = Config::load_from_path(&ctx.config_path).unwrap();
        assert_eq!(saved.timer.work_minutes, 40);
        assert_eq!(saved.timer.break_minutes, 5);
    }

    #[test]
    fn test_set_rejects_zero_without_writing() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        let err = config(&ctx, ConfigCommands::Set { work: Some(0), brk: None }).unwrap_err();
        assert!(matches!(err, TimerError::InvalidInput(_)));
        assert!(!ctx.config_path.exists());
    }

    #[test]
    fn test_set_requires_a_value() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        assert!(config(&ctx, ConfigCommands::Set { work: None, brk: None }).is_err());
    }

    #[test]
    fn test_path() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let out = config(&ctx, ConfigCommands::Path).unwrap();
        assert!(out.ends_with("config.yaml"));
    }
}

//! Command implementations for pomotimer.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod config;
mod history;
mod run;
mod stats;

pub use completions::completions;
pub use config::config;
pub use history::history;
pub use run::run;
pub use stats::stats;

use std::path::PathBuf;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::TimerError;
use crate::features::focus::SessionLog;

/// Everything a command needs, resolved from flags, environment and config.
#[derive(Debug, Clone)]
pub struct Context {
    /// Data directory layout.
    pub paths: Paths,
    /// Config file in use.
    pub config_path: PathBuf,
    /// Loaded configuration.
    pub config: Config,
    /// Session log in use.
    pub log: SessionLog,
    /// Output format for command results.
    pub format: OutputFormat,
}

impl Context {
    /// Resolve paths and load configuration for a parsed command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown or the config file is invalid.
    pub fn from_cli(cli: &Cli) -> Result<Self, TimerError> {
        let paths = Paths::new()?;
        Self::with_paths(cli, paths)
    }

    /// Like [`Context::from_cli`] with an explicit data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is invalid.
    pub fn with_paths(cli: &Cli, paths: Paths) -> Result<Self, TimerError> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| paths.config_file.clone());
        let config = Config::load_from_path(&config_path)?;

        let log_path = cli
            .log_file
            .clone()
            .unwrap_or_else(|| config.session_log_path(&paths));
        let format = cli.output.unwrap_or(config.general.default_output);

        Ok(Self {
            paths,
            config_path,
            config,
            log: SessionLog::new(log_path),
            format,
        })
    }
}

//! Configuration settings for pomotimer.
//!
//! Settings are loaded from `~/.pomotimer/config.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::TimerError;
use crate::features::focus::timer::{DEFAULT_BREAK_MINUTES, DEFAULT_WORK_MINUTES};
use crate::features::focus::SessionConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Session durations.
    pub timer: TimerConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Session log location, if not the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Session duration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Work session length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Break session length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_work_minutes() -> u32 {
    DEFAULT_WORK_MINUTES
}

const fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            log_file: None,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl TimerConfig {
    /// Validated session durations.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::Config` if either duration is zero.
    pub fn session_config(&self) -> Result<SessionConfig, TimerError> {
        SessionConfig::from_minutes(self.work_minutes, self.break_minutes)
            .map_err(|e| TimerError::Config(format!("invalid timer durations: {e}")))
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// holds a zero duration.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TimerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TimerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            TimerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.timer.session_config()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TimerError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TimerError::Config(format!("Failed to serialize config: {e}")))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimerError::Config(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        std::fs::write(path, contents).map_err(|e| {
            TimerError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Session log location: the configured override or the default path.
    #[must_use]
    pub fn session_log_path(&self, paths: &Paths) -> PathBuf {
        self.general
            .log_file
            .clone()
            .unwrap_or_else(|| paths.session_log.clone())
    }
}

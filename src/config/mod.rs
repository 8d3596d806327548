//! Configuration management for pomotimer.
//!
//! This module handles loading and saving configuration from `~/.pomotimer/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, TimerConfig};

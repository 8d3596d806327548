//! pomotimer - A Pomodoro-style work/break timer for the terminal
//!
//! This crate provides a session timer that alternates work and break
//! intervals, an append-only CSV log of completed sessions, and analytics
//! over that log.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TimerError;
pub use features::focus::{SessionConfig, SessionLog, SessionTimer};

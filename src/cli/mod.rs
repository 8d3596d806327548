//! Command-line interface for pomotimer.

pub mod args;
pub mod commands;

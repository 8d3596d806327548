//! Diagnostic logging setup.
//!
//! The interactive timer owns the terminal, so while it runs diagnostics go
//! to `~/.pomotimer/pomotimer.log`. Other commands log warnings to stderr.
//! `POMOTIMER_LOG` overrides the filter using `tracing_subscriber::EnvFilter`
//! syntax.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "POMOTIMER_LOG";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Send diagnostics to a file, appending across runs.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a subscriber is already set.
pub fn init_file(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("installing file logger")
}

/// Send diagnostics to stderr.
///
/// # Errors
///
/// Returns an error if a subscriber is already set.
pub fn init_stderr() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("installing stderr logger")
}

//! Path resolution for pomotimer configuration and data files.
//!
//! All pomotimer data is stored in `~/.pomotimer/`:
//! - `config.yaml` - Durations and output preferences
//! - `sessions.csv` - Append-only log of completed sessions
//! - `pomotimer.log` - Diagnostic log written while the timer UI is open

use std::path::PathBuf;

use crate::error::TimerError;

/// Paths to pomotimer configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomotimer/`
    pub root: PathBuf,
    /// Config file: `~/.pomotimer/config.yaml`
    pub config_file: PathBuf,
    /// Session log: `~/.pomotimer/sessions.csv`
    pub session_log: PathBuf,
    /// Diagnostic log: `~/.pomotimer/pomotimer.log`
    pub diagnostics: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TimerError> {
        let home = std::env::var("HOME")
            .map_err(|_| TimerError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomotimer")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            session_log: root.join("sessions.csv"),
            diagnostics: root.join("pomotimer.log"),
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomotimer");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.session_log, root.join("sessions.csv"));
        assert_eq!(paths.diagnostics, root.join("pomotimer.log"));
    }
}

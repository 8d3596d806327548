//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TimerError;

/// Generate the completion script for `shell`.
pub fn completions(shell: Shell) -> Result<String, TimerError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomotimer", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| TimerError::InvalidInput(format!("completion script is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("pomotimer"));
        assert!(script.contains("history"));
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomotimer")]
#[command(about = "A Pomodoro-style work/break timer for the terminal")]
#[command(long_about = "pomotimer - A Pomodoro-style work/break timer

Alternates work and break sessions with a live countdown, logs every
completed session to a CSV file, and charts the time you spent.

QUICK START:
  pomotimer                 Open the timer (25 min work / 5 min break)
  pomotimer run -w 50 -b 10 Open the timer with custom durations
  pomotimer stats           Total minutes per session kind
  pomotimer history         Most recent sessions

TIMER KEYS:
  s  start    r  reset    c  change durations    a  analytics    q  quit

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config value.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Session log file (CSV)
    ///
    /// Defaults to ~/.pomotimer/sessions.csv or `general.log_file`.
    #[arg(long, global = true, env = "POMOTIMER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Configuration file
    ///
    /// Defaults to ~/.pomotimer/config.yaml.
    #[arg(long, global = true, env = "POMOTIMER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer
    ///
    /// This is the default when no command is given. Durations given here
    /// override the config file for this run only.
    ///
    /// # Examples
    ///
    ///   pomotimer run
    ///   pomotimer run --work 50 --break 10
    Run(RunArgs),

    /// Show total minutes per session kind
    ///
    /// Reads the whole session log and renders one bar per kind.
    /// Unreadable lines are skipped and counted.
    Stats,

    /// List the most recent completed sessions
    History {
        /// Number of sessions to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Show or change the configuration
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomotimer completions bash > ~/.local/share/bash-completion/completions/pomotimer
    ///   pomotimer completions zsh > ~/.zfunc/_pomotimer
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the interactive timer.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Work session length in minutes
    #[arg(short, long)]
    pub work: Option<u32>,

    /// Break session length in minutes
    #[arg(short = 'b', long = "break")]
    pub brk: Option<u32>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Save new default durations
    ///
    /// Examples:
    ///   pomotimer config set --work 50 --break 10
    Set {
        /// Work session length in minutes
        #[arg(short, long)]
        work: Option<u32>,

        /// Break session length in minutes
        #[arg(short = 'b', long = "break")]
        brk: Option<u32>,
    },
}

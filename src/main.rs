use clap::Parser;
use colored::Colorize;

use pomotimer::cli::args::{Cli, Commands, RunArgs};
use pomotimer::cli::commands::{self, Context};
use pomotimer::error::TimerError;
use pomotimer::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TimerError> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli)?;

    let interactive = matches!(cli.command, None | Some(Commands::Run(_)));
    let logger = if interactive {
        logging::init_file(&ctx.paths.diagnostics)
    } else {
        logging::init_stderr()
    };
    if let Err(e) = logger {
        eprintln!("{}: logging disabled: {e:#}", "warning".yellow().bold());
    }

    let output = match cli.command {
        None => commands::run(&ctx, &RunArgs::default())?,
        Some(Commands::Run(args)) => commands::run(&ctx, &args)?,
        Some(Commands::Stats) => commands::stats(&ctx)?,
        Some(Commands::History { limit }) => commands::history(&ctx, limit)?,
        Some(Commands::Config(args)) => commands::config(&ctx, args.command)?,
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

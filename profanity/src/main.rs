// profanity/src/main.rs
//! Entry point for the `profanity` binary.
//!
//! Exit codes: 0 on success (and for a clean `check`), 1 when `check` finds a
//! bad word, 2 on any error.

use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use profanity::cli::{Cli, Commands};
use profanity::commands::{self, check, sanitise};
use profanity::logger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug {
        Some(LevelFilter::Debug)
    } else if cli.quiet {
        Some(LevelFilter::Off)
    } else {
        None
    };
    logger::init_logger(level);

    let outcome = match &cli.command {
        Commands::Check(cmd) => check::run_check(cmd).map(|found| {
            if found {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }),
        Commands::Sanitise(cmd) => sanitise::run_sanitise(cmd, cli.quiet).map(|()| ExitCode::SUCCESS),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            commands::error_msg(format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

//! check-commits: validate every commit in a revision range before it goes
//! upstream.
//!
//! This is the main entry point for the `check-commits` CLI. It parses
//! arguments, sets up logging, runs the range validation, and maps errors to
//! exit codes.

mod build;
mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod git;
mod invoke;
mod logging;
mod materialize;
mod pipeline;
mod progress;
mod report;
mod revision;
mod stages;

#[cfg(test)]
mod test_support;

use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // Usage errors share the user-error exit code.
                let _ = err.print();
                return ExitCode::from(exit_codes::USER_ERROR as u8);
            }
        },
    };

    logging::init(cli.verbose);

    match commands::cmd_check(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

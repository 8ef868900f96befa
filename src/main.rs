//! # pacx CLI
//!
//! This is the binary entry point for the `pacx` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Printing a failed command's single error message to stderr and exiting
//!   with status 1.
//!
//! The dispatch logic is defined in the `lib.rs` library crate, so the
//! binary stays a thin wrapper around it.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use pacx::output::error_label;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let output = cli.output_config();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", error_label(&output));
            ExitCode::FAILURE
        }
    }
}

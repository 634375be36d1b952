//! Shotwright: cinematic prompt composer for diffusion workflows.
//!
//! This is the main entry point for the `shotwright` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and handles
//! errors with proper exit codes.

mod cli;
mod commands;
pub mod catalog;
pub mod compose;
pub mod encoder;
pub mod error;
pub mod exit_codes;
pub mod negative;
pub mod presets;
pub mod random;
pub mod shot;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

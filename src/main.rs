//! csv2md CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! conversion, and turn any error into a message and a non-zero exit status.
//! For programmatic use, prefer the library API (`csv2md::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("csv2md: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Command Line Interface (CLI) layer for csv2md.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It turns user-provided flags into
//! a `ConvertOptions` value and hands it to the library API.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;

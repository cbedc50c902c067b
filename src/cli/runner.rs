use std::io::{self, Write};

use clap::CommandFactory;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use csv2md::{InputSource, convert_source, write_lines};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_usage<W: Write>(mut out: W) -> io::Result<()> {
    let help = CliArgs::command().render_help();
    write!(out, "{help}")?;
    out.flush()
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    if args.wants_help() {
        print_usage(io::stdout().lock())?;
        return Ok(());
    }

    let options = args.options();
    debug!("Options: {:?}", options);

    let source = InputSource::resolve(args.file.as_deref())?;
    let lines = convert_source(&source, &options)?;

    if lines.is_empty() {
        warn!("No rows found in {}", source.label());
        print_usage(io::stderr().lock())?;
        return Ok(());
    }

    write_lines(io::stdout().lock(), &lines)?;
    Ok(())
}

//! Crate-level error type and `Result` alias. Every failure in reading,
//! resolving or parsing input is returned as one of these variants; nothing in
//! the library terminates the process.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to resolve path '{path}': {reason}")]
    PathResolution { path: String, reason: String },

    #[error("Failed to open file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV from {origin}: {}", describe_parse(.line, .column, .message))]
    Parse {
        origin: String,
        line: Option<u64>,
        column: Option<u64>,
        message: String,
    },

    #[error("Invalid options preset: {0}")]
    Preset(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_parse(line: &Option<u64>, column: &Option<u64>, message: &str) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => format!("line {line}, column {column}: {message}"),
        (Some(line), None) => format!("line {line}: {message}"),
        _ => message.to_string(),
    }
}

impl Error {
    pub fn parse<E: std::fmt::Display>(origin: &str, line: Option<u64>, e: E) -> Self {
        Error::Parse {
            origin: origin.to_string(),
            line,
            column: None,
            message: e.to_string(),
        }
    }
}

use thiserror::Error;

/// Errors surfaced by the CLI; `main` prints them and exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Convert(#[from] csv2md::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

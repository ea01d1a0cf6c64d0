//! Error type for buffer acquisition and output

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while acquiring a buffer or writing rows.
///
/// Parsing itself never fails: malformed quoting degrades to a best-effort
/// split instead of producing an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("file is empty: {}", path.display())]
    EmptyFile { path: PathBuf },

    #[error("could not map {}: {source}", path.display())]
    MapFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is empty")]
    EmptyInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

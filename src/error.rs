//! Error types for the outer edges of the pipeline
//!
//! Extraction itself never fails; conditions met while walking a message are
//! reported as [`Diagnostic`](crate::Diagnostic)s instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when reading input or persisting records
#[derive(Error, Debug)]
pub enum Error {
    /// Raw message bytes could not be parsed as RFC 822 / MIME
    #[error("Failed to parse message structure: {0}")]
    Structure(#[from] mailparse::MailParseError),

    /// Provider JSON or a stored record is malformed
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem access failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for fallible mailbrief operations
pub type Result<T> = std::result::Result<T, Error>;

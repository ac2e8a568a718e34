use std::path::PathBuf;
use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing a logo container.
///
/// Every operation in the crate returns this type; a failure aborts the whole
/// unpack or repack and nothing is retried.
#[derive(Debug, Error)]
pub enum LogoError {
    /// A compressed image is not a valid zlib stream, or the layout is inconsistent.
    #[error("Invalid data: {0}")]
    Format(String),
    /// The container is shorter than its header claims.
    #[error("Truncated input: {what} needs {needed} bytes but only {available} remain")]
    TruncatedInput {
        /// The field or payload being read.
        what: String,
        /// Bytes required by the read.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },
    /// The image directory is missing or cannot be listed.
    #[error("Image directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Represents an error that occurs during I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogoError {
    pub(crate) fn truncated(what: impl Into<String>, needed: usize, available: usize) -> Self {
        LogoError::TruncatedInput {
            what: what.into(),
            needed,
            available,
        }
    }
}

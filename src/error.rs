//! Error types for the feed pipeline.
//!
//! Only I/O failures are errors. Problems with the feed contents are
//! reported as [`Event`](crate::events::Event)s and never abort a report.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading feeds or writing a report.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading from an already open byte source failed.
    #[error("failed to read feed: {0}")]
    Read(#[from] std::io::Error),

    /// A feed file could not be opened or read.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The report file could not be written.
    #[error("failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display() {
        let err = Error::Open {
            path: PathBuf::from("users.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("users.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Read(_)));
        assert!(err.to_string().contains("truncated"));
    }
}

//! Error taxonomy for stream acquisition and transduction

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while acquiring or driving a byte stream.
///
/// Every failure is terminal for the current pass; there are no retry or
/// resume semantics. A read failure is always distinct from ordinary
/// end-of-stream, which sources report as `Ok(None)`.
#[derive(Error, Debug)]
pub enum StreamError {
    /// A file could not be opened in the requested mode
    #[error("failed to open {path}: {source}")]
    Open {
        /// The path that was requested
        path: PathBuf,
        /// The underlying OS error
        #[source]
        source: io::Error,
    },

    /// The source malfunctioned mid-stream
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// The sink rejected a write or a final flush
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

impl StreamError {
    /// Whether this failure happened while opening a file, as opposed to
    /// mid-stream. Callers use this to pick a distinct exit signal.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, StreamError::Open { .. })
    }
}

/// Result type for stream operations
pub type Result<T> = std::result::Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_failure_display_includes_path() {
        let err = StreamError::Open {
            path: PathBuf::from("/no/such/file.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/no/such/file.txt"));
        assert!(err.is_open_failure());
    }

    #[test]
    fn read_and_write_are_not_open_failures() {
        let read = StreamError::Read(io::Error::new(io::ErrorKind::Other, "device gone"));
        let write = StreamError::Write(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert!(!read.is_open_failure());
        assert!(!write.is_open_failure());
        assert!(read.to_string().starts_with("read failed"));
        assert!(write.to_string().starts_with("write failed"));
    }
}

//! Error handling and exit-code policy for the CLI application

use charpipe_core::StreamError;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Exit code when a required file could not be opened
pub const EXIT_OPEN_FAILURE: i32 = 2;

/// Exit code for any other failure
pub const EXIT_FAILURE: i32 = 1;

/// Map a failed run to its process exit code.
///
/// Failing to open a required file aborts the run with a distinct exit
/// signal; everything else (mid-stream read/write failures included)
/// exits with the generic failure code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<StreamError>() {
        Some(stream_err) if stream_err.is_open_failure() => EXIT_OPEN_FAILURE,
        _ => EXIT_FAILURE,
    }
}

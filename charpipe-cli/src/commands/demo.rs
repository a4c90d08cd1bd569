//! Stream demonstration command
//!
//! Writes matching lines to stdout and stderr so that redirection
//! behavior is directly observable: `charpipe demo streams > out.txt`
//! captures only the stdout lines while the stderr lines stay on the
//! terminal, and `2> err.txt` does the reverse.

use crate::error::CliResult;

/// Print paired lines on stdout and stderr.
pub fn streams() -> CliResult<()> {
    println!("stdout: this line goes to standard output");
    eprintln!("stderr: this line goes to standard error");

    println!("stdout: redirect with `> out.txt` and this stream leaves the terminal");
    eprintln!("stderr: redirect with `2> err.txt` to capture this stream separately");

    // stdout is typically line-buffered on a terminal, stderr unbuffered;
    // that difference is why diagnostics belong on stderr.
    eprintln!("stderr: diagnostics stay visible even when stdout is redirected");

    Ok(())
}

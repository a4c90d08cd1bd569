//! Binding of CLI arguments to concrete sources and sinks
//!
//! This is the thin file-lifecycle layer: it resolves "no path" to the
//! process's standard streams and a path to a file handle in the
//! requested mode. Handles close on drop, on every exit path.

use charpipe_core::{ByteSink, ByteSource, ReaderSource, Result, StreamError, WriterSink};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Open the input as a byte source: a file in read mode, or stdin.
pub fn open_source(input: Option<&Path>) -> Result<Box<dyn ByteSource>> {
    Ok(match input {
        Some(path) => Box::new(ReaderSource::open(path)?),
        None => Box::new(ReaderSource::new(io::stdin())),
    })
}

/// Open the output as a byte sink: a file in write-truncate or append
/// mode, or stdout.
pub fn open_sink(output: Option<&Path>, append: bool) -> Result<Box<dyn ByteSink>> {
    Ok(match output {
        Some(path) if append => Box::new(WriterSink::append(path)?),
        Some(path) => Box::new(WriterSink::create(path)?),
        None => Box::new(WriterSink::new(io::stdout())),
    })
}

/// Open the output as a plain writer for report rendering.
///
/// Same modes and same open-failure reporting as [`open_sink`]; the
/// counting variants go through here because their output is a rendered
/// report, not a byte-for-byte stream.
pub fn open_report_target(output: Option<&Path>, append: bool) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) if append => Box::new(open_append(path)?),
        Some(path) => Box::new(File::create(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })?),
        None => Box::new(io::stdout()),
    })
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use charpipe_core::copy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_to_file_copy_through_bound_streams() {
        let temp_dir = TempDir::new().unwrap();
        let in_path = temp_dir.path().join("in.txt");
        let out_path = temp_dir.path().join("out.txt");
        fs::write(&in_path, "stream me").unwrap();

        let mut source = open_source(Some(&in_path)).unwrap();
        let mut sink = open_sink(Some(&out_path), false).unwrap();
        copy(&mut *source, &mut *sink).unwrap();
        drop(sink);

        assert_eq!(fs::read_to_string(&out_path).unwrap(), "stream me");
    }

    #[test]
    fn sink_append_mode_preserves_content() {
        let temp_dir = TempDir::new().unwrap();
        let out_path = temp_dir.path().join("out.txt");
        fs::write(&out_path, "kept:").unwrap();

        let mut source: &[u8] = b"added";
        let mut sink = open_sink(Some(&out_path), true).unwrap();
        copy(&mut source, &mut *sink).unwrap();
        drop(sink);

        assert_eq!(fs::read_to_string(&out_path).unwrap(), "kept:added");
    }

    #[test]
    fn missing_input_file_is_open_failure() {
        let err = open_source(Some(Path::new("/nonexistent/in.txt"))).unwrap_err();
        assert!(err.is_open_failure());
    }

    #[test]
    fn report_target_append_preserves_content() {
        let temp_dir = TempDir::new().unwrap();
        let out_path = temp_dir.path().join("report.txt");
        fs::write(&out_path, "42\n").unwrap();

        let mut target = open_report_target(Some(&out_path), true).unwrap();
        writeln!(target, "7").unwrap();
        drop(target);

        assert_eq!(fs::read_to_string(&out_path).unwrap(), "42\n7\n");
    }
}

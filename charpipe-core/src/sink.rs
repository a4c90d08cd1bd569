//! Push-based byte sinks
//!
//! A sink exposes "append one byte" plus a terminal flush. File-backed
//! sinks release their handle on drop, whatever the exit path.

use crate::error::{Result, StreamError};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A sink that accepts bytes one at a time.
pub trait ByteSink {
    /// Append one byte.
    fn put(&mut self, byte: u8) -> Result<()>;

    /// Flush any buffered output. A failure here is a write failure and
    /// must be surfaced; transductions call this once after end-of-stream.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Adapter from any [`std::io::Write`] to a [`ByteSink`], buffered.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            inner: BufWriter::new(writer),
        }
    }
}

impl WriterSink<File> {
    /// Open a file in write-truncate mode, creating it if absent.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }

    /// Open a file in append mode, creating it if absent.
    ///
    /// Existing content is preserved and the write cursor starts at the
    /// current end.
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| StreamError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> ByteSink for WriterSink<W> {
    fn put(&mut self, byte: u8) -> Result<()> {
        self.inner.write_all(&[byte]).map_err(StreamError::Write)
    }

    fn finish(&mut self) -> Result<()> {
        self.inner.flush().map_err(StreamError::Write)
    }
}

/// In-memory sink, mainly for tests and pure transformations.
impl ByteSink for Vec<u8> {
    fn put(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }
}

//! Pull-based byte sources
//!
//! A source exposes exactly one capability: "next byte or end-of-stream".
//! The cursor advances monotonically; there is no peeking or seeking.

use crate::error::{Result, StreamError};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// A source of bytes pulled one at a time.
///
/// `Ok(Some(byte))` is a real byte, `Ok(None)` is end-of-stream, and
/// `Err(_)` is a mid-stream read failure. The three outcomes are disjoint
/// by construction, so no reserved byte value is ever needed to signal
/// exhaustion.
pub trait ByteSource {
    /// Pull the next byte, or report end-of-stream.
    ///
    /// After end-of-stream has been reported, further calls keep
    /// returning `Ok(None)`.
    fn next_byte(&mut self) -> Result<Option<u8>>;
}

impl std::fmt::Debug for dyn ByteSource + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ByteSource")
    }
}

/// Adapter from any [`std::io::Read`] to a [`ByteSource`].
///
/// Reads are buffered internally so byte-at-a-time pulls do not become
/// byte-at-a-time syscalls. The buffering policy itself is not exposed.
#[derive(Debug)]
pub struct ReaderSource<R: Read> {
    inner: BufReader<R>,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
        }
    }
}

impl ReaderSource<File> {
    /// Open a file in read mode.
    ///
    /// The handle is released when the source is dropped, on every exit
    /// path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(StreamError::Read(e)),
            }
        }
    }
}

/// In-memory source over a byte slice. The slice is consumed from the
/// front as bytes are pulled.
impl ByteSource for &[u8] {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let slice = *self;
        match slice.split_first() {
            Some((&byte, rest)) => {
                *self = rest;
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }
}

//! Pull-based byte stream transduction
//!
//! This crate provides the source/sink abstractions and the single-pass
//! transduction operations: copying, byte and line counting, whitespace
//! classification, space-run collapsing, and escape rewriting.
//!
//! Every operation consumes its source to exhaustion exactly once and owns
//! its accumulator locally for the duration of that pass; there is no
//! process-wide state. End-of-stream is a value of the result type
//! (`Ok(None)`), never a reserved byte, so the sentinel can never collide
//! with real stream data.

#![warn(missing_docs)]

pub mod error;
pub mod report;
pub mod sink;
pub mod source;
pub mod transduce;

pub use error::{Result, StreamError};
pub use report::{CountReport, WhitespaceReport};
pub use sink::{ByteSink, WriterSink};
pub use source::{ByteSource, ReaderSource};
pub use transduce::{
    classify_whitespace, collapse_spaces, copy, count_bytes, count_lines, escape, unescape,
};

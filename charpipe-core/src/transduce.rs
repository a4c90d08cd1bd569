//! Single-pass byte stream transductions
//!
//! Each operation pulls its source to exhaustion exactly once and applies
//! one rule per byte, carrying at most one boolean or a handful of
//! counters. Accumulators live on the stack of the call and are returned
//! after end-of-stream; nothing here touches shared state.
//!
//! Write failures propagate immediately and end the pass; the sink is
//! flushed via [`ByteSink::finish`] once the source is exhausted so a
//! final flush failure is surfaced rather than swallowed.

use crate::error::Result;
use crate::report::WhitespaceReport;
use crate::sink::ByteSink;
use crate::source::ByteSource;

const SPACE: u8 = b' ';
const TAB: u8 = b'\t';
const NEWLINE: u8 = b'\n';
const BACKSPACE: u8 = 0x08;
const BACKSLASH: u8 = b'\\';

/// Copy the source to the sink unchanged.
pub fn copy<S, K>(source: &mut S, sink: &mut K) -> Result<()>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    while let Some(byte) = source.next_byte()? {
        sink.put(byte)?;
    }
    sink.finish()
}

/// Count every byte in the source, newlines included.
pub fn count_bytes<S>(source: &mut S) -> Result<u64>
where
    S: ByteSource + ?Sized,
{
    let mut count = 0u64;
    while source.next_byte()?.is_some() {
        count += 1;
    }
    Ok(count)
}

/// Count newline-terminated lines.
///
/// Only `\n` bytes are counted, so a final line without a trailing
/// terminator does not contribute. That undercount is deliberate and kept
/// from the original byte-at-a-time formulation; callers that need the
/// other convention can check whether the stream ended mid-line
/// themselves.
pub fn count_lines<S>(source: &mut S) -> Result<u64>
where
    S: ByteSource + ?Sized,
{
    let mut newlines = 0u64;
    while let Some(byte) = source.next_byte()? {
        if byte == NEWLINE {
            newlines += 1;
        }
    }
    Ok(newlines)
}

/// Count spaces, tabs, and newlines in one pass.
///
/// Each byte increments at most one counter; everything outside the three
/// classes leaves the report untouched.
pub fn classify_whitespace<S>(source: &mut S) -> Result<WhitespaceReport>
where
    S: ByteSource + ?Sized,
{
    let mut report = WhitespaceReport::default();
    while let Some(byte) = source.next_byte()? {
        match byte {
            SPACE => report.spaces += 1,
            TAB => report.tabs += 1,
            NEWLINE => report.newlines += 1,
            _ => {}
        }
    }
    Ok(report)
}

/// Reduce every run of consecutive spaces to a single space.
///
/// Only the space byte is collapsible. Tabs and newlines are ordinary
/// non-space bytes here: they are written unchanged and they end a run.
/// The operation is idempotent.
pub fn collapse_spaces<S, K>(source: &mut S, sink: &mut K) -> Result<()>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    let mut previous_was_space = false;
    while let Some(byte) = source.next_byte()? {
        if byte == SPACE {
            if !previous_was_space {
                sink.put(byte)?;
                previous_was_space = true;
            }
        } else {
            sink.put(byte)?;
            previous_was_space = false;
        }
    }
    sink.finish()
}

/// Rewrite tab, backspace, and backslash as visible two-byte escapes.
///
/// Tab becomes `\t`, backspace becomes `\b`, backslash becomes `\\`;
/// every other byte passes through unchanged. The two bytes of each
/// escape are emitted adjacently and in order.
pub fn escape<S, K>(source: &mut S, sink: &mut K) -> Result<()>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    while let Some(byte) = source.next_byte()? {
        match byte {
            TAB => {
                sink.put(BACKSLASH)?;
                sink.put(b't')?;
            }
            BACKSPACE => {
                sink.put(BACKSLASH)?;
                sink.put(b'b')?;
            }
            BACKSLASH => {
                sink.put(BACKSLASH)?;
                sink.put(BACKSLASH)?;
            }
            _ => sink.put(byte)?,
        }
    }
    sink.finish()
}

/// Decode the escapes produced by [`escape`].
///
/// `\t`, `\b`, and `\\` become tab, backspace, and backslash. A backslash
/// followed by any other byte, or a lone trailing backslash, is passed
/// through unchanged rather than rejected, so the decoder is total over
/// arbitrary input.
pub fn unescape<S, K>(source: &mut S, sink: &mut K) -> Result<()>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    while let Some(byte) = source.next_byte()? {
        if byte != BACKSLASH {
            sink.put(byte)?;
            continue;
        }
        match source.next_byte()? {
            Some(b't') => sink.put(TAB)?,
            Some(b'b') => sink.put(BACKSPACE)?,
            Some(BACKSLASH) => sink.put(BACKSLASH)?,
            Some(other) => {
                sink.put(BACKSLASH)?;
                sink.put(other)?;
            }
            None => sink.put(BACKSLASH)?,
        }
    }
    sink.finish()
}

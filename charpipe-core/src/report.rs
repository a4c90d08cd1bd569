//! Scalar reports produced by the counting transductions
//!
//! Reports are plain serializable values so callers can render them as
//! text or JSON without reaching back into the counting logic.

use serde::{Deserialize, Serialize};

/// Result of a single counting pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountReport {
    /// Number of matching items seen before end-of-stream
    pub count: u64,
}

impl CountReport {
    /// Wrap a raw count.
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

/// Per-class counters from a whitespace classification pass.
///
/// Each input byte increments at most one counter; the three classes are
/// disjoint, so the total never exceeds the input length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitespaceReport {
    /// Number of space bytes (0x20)
    pub spaces: u64,
    /// Number of tab bytes (0x09)
    pub tabs: u64,
    /// Number of newline bytes (0x0A)
    pub newlines: u64,
}

impl WhitespaceReport {
    /// Total whitespace bytes across the three classes.
    pub fn total(&self) -> u64 {
        self.spaces + self.tabs + self.newlines
    }
}

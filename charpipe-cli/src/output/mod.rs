//! Report rendering for the counting variants

use crate::error::CliResult;
use charpipe_core::{CountReport, WhitespaceReport};

/// Trait for report renderers
pub trait ReportWriter {
    /// Render a single-counter report under the given label
    fn write_count(&mut self, label: &str, report: &CountReport) -> CliResult<()>;

    /// Render the three-counter whitespace report
    fn write_whitespace(&mut self, report: &WhitespaceReport) -> CliResult<()>;
}

pub mod json;
pub mod text;

pub use json::JsonReportWriter;
pub use text::TextReportWriter;

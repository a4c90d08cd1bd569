//! Plain text report renderer

use super::ReportWriter;
use crate::error::CliResult;
use charpipe_core::{CountReport, WhitespaceReport};
use std::io::Write;

/// Plain text renderer - bare number for counts, one line per class for
/// the whitespace report
pub struct TextReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextReportWriter<W> {
    /// Create a new text renderer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TextReportWriter<W> {
    fn write_count(&mut self, _label: &str, report: &CountReport) -> CliResult<()> {
        writeln!(self.writer, "{}", report.count)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_whitespace(&mut self, report: &WhitespaceReport) -> CliResult<()> {
        writeln!(self.writer, "spaces: {}", report.spaces)?;
        writeln!(self.writer, "tabs: {}", report.tabs)?;
        writeln!(self.writer, "newlines: {}", report.newlines)?;
        self.writer.flush()?;
        Ok(())
    }
}

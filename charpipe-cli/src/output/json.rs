//! JSON report renderer

use super::ReportWriter;
use crate::error::CliResult;
use charpipe_core::{CountReport, WhitespaceReport};
use serde_json::json;
use std::io::Write;

/// JSON renderer - one object per report
pub struct JsonReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonReportWriter<W> {
    /// Create a new JSON renderer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_count(&mut self, label: &str, report: &CountReport) -> CliResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, &json!({ label: report.count }))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_whitespace(&mut self, report: &WhitespaceReport) -> CliResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Run command implementation

use crate::error::CliResult;
use crate::output::{JsonReportWriter, ReportWriter, TextReportWriter};
use crate::stream;
use charpipe_core::{
    classify_whitespace, collapse_spaces, copy, count_bytes, count_lines, escape, unescape,
    ByteSink, ByteSource, CountReport,
};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Transduction variant to run
    #[arg(long, value_enum, value_name = "VARIANT")]
    pub op: Operation,

    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Open the output file in append mode instead of truncating
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Output format for the counting variants
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The transduction variants
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Operation {
    /// Copy input to output unchanged
    Copy,
    /// Count every byte, newlines included
    CountBytes,
    /// Count newline-terminated lines
    CountLines,
    /// Count spaces, tabs, and newlines
    Classify,
    /// Reduce each run of spaces to one space
    Collapse,
    /// Rewrite tab, backspace, and backslash as visible escapes
    Escape,
    /// Decode escapes produced by the escape variant
    Unescape,
}

impl Operation {
    fn describe(&self) -> &'static str {
        match self {
            Operation::Copy => "copy input to output unchanged",
            Operation::CountBytes => "count every byte, newlines included",
            Operation::CountLines => "count newline-terminated lines",
            Operation::Classify => "count spaces, tabs, and newlines",
            Operation::Collapse => "reduce each run of spaces to one space",
            Operation::Escape => "rewrite tab, backspace, and backslash as visible escapes",
            Operation::Unescape => "decode escapes produced by the escape variant",
        }
    }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Plain text, one value or class per line
    Text,
    /// A single JSON object
    Json,
}

/// Print the transduction variants with one-line descriptions.
pub fn list_ops() {
    for op in Operation::value_variants() {
        if let Some(value) = op.to_possible_value() {
            println!("{:<12} {}", value.get_name(), op.describe());
        }
    }
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("running variant {:?}", self.op);
        log::debug!("arguments: {:?}", self);

        match self.op {
            Operation::Copy => self.run_filter(copy),
            Operation::Collapse => self.run_filter(collapse_spaces),
            Operation::Escape => self.run_filter(escape),
            Operation::Unescape => self.run_filter(unescape),
            Operation::CountBytes => self.run_count("bytes", count_bytes),
            Operation::CountLines => self.run_count("lines", count_lines),
            Operation::Classify => self.run_classify(),
        }
    }

    /// One pass source-to-sink; the sink is flushed by the operation.
    fn run_filter<F>(&self, op: F) -> CliResult<()>
    where
        F: FnOnce(
            &mut (dyn ByteSource + 'static),
            &mut (dyn ByteSink + 'static),
        ) -> charpipe_core::Result<()>,
    {
        let mut source = stream::open_source(self.input.as_deref())?;
        let mut sink = stream::open_sink(self.output.as_deref(), self.append)?;
        op(&mut *source, &mut *sink)?;
        Ok(())
    }

    /// One counting pass, then render the report.
    fn run_count<F>(&self, label: &str, op: F) -> CliResult<()>
    where
        F: FnOnce(&mut (dyn ByteSource + 'static)) -> charpipe_core::Result<u64>,
    {
        let mut source = stream::open_source(self.input.as_deref())?;
        let count = op(&mut *source)?;
        self.report_writer()?
            .write_count(label, &CountReport::new(count))
    }

    fn run_classify(&self) -> CliResult<()> {
        let mut source = stream::open_source(self.input.as_deref())?;
        let report = classify_whitespace(&mut *source)?;
        self.report_writer()?.write_whitespace(&report)
    }

    fn report_writer(&self) -> CliResult<Box<dyn ReportWriter>> {
        let target = stream::open_report_target(self.output.as_deref(), self.append)?;
        Ok(match self.format {
            ReportFormat::Text => Box::new(TextReportWriter::new(target)),
            ReportFormat::Json => Box::new(JsonReportWriter::new(target)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

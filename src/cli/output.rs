/// Output formatting for the casefinder CLI
///
/// - Prompt: human/LLM-readable prompt blocks (default)
/// - JSON: one pretty-printed array of file reports
/// - NDJSON: one file report per line, streaming-friendly
use super::prompt::render_report;
use crate::analysis::FileReport;
use anyhow::Result;
use std::io::{self, Stdout, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Prompt blocks for every resolved test case
    Prompt,

    /// Standard JSON array (pretty-printed)
    Json,

    /// Newline-delimited JSON (streaming)
    Ndjson,
}

pub struct OutputWriter<W: Write = Stdout> {
    format: OutputFormat,
    writer: W,
    buffer: Vec<FileReport>,
    /// Print a `==> path <==` line before each prompt report
    label_reports: bool,
}

impl OutputWriter<Stdout> {
    /// Create a writer on stdout
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, io::stdout())
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn new(format: OutputFormat, writer: W) -> Self {
        Self {
            format,
            writer,
            buffer: Vec::new(),
            label_reports: false,
        }
    }

    /// Label each prompt report with its file path (directory mode)
    pub fn label_reports(mut self, label: bool) -> Self {
        self.label_reports = label;
        self
    }

    /// Write a single report
    pub fn write_report(&mut self, report: &FileReport) -> Result<()> {
        match self.format {
            OutputFormat::Prompt => {
                if self.label_reports {
                    writeln!(self.writer, "==> {} <==", report.test_file.display())?;
                }
                write!(self.writer, "{}", render_report(report))?;
            }
            OutputFormat::Ndjson => {
                writeln!(self.writer, "{}", serde_json::to_string(report)?)?;
                self.writer.flush()?;
            }
            OutputFormat::Json => {
                // Buffer until flush so the array is written in one piece
                self.buffer.push(report.clone());
            }
        }
        Ok(())
    }

    pub fn write_batch(&mut self, reports: &[FileReport]) -> Result<()> {
        for report in reports {
            self.write_report(report)?;
        }
        Ok(())
    }

    /// Write anything still buffered and hand back the underlying writer
    pub fn flush(mut self) -> Result<W> {
        if self.format == OutputFormat::Json {
            writeln!(self.writer, "{}", serde_json::to_string_pretty(&self.buffer)?)?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

use crate::errors::Result;
use crate::formatting::{OutputFormatter, PlainFormatter};
use crate::report::{DemoReport, JavaScriptSample, PythonSample};
use clap::ValueEnum;
use std::fmt::Display;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable demonstration text
    Text,
    /// Pretty-printed JSON
    Json,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &DemoReport) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DemoReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

/// Pure function rendering a list as `[a, b, c]`
fn format_list<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

pub struct TextWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { writer, formatter }
    }

    pub fn plain(writer: W) -> Self {
        Self::new(writer, Box::new(PlainFormatter))
    }

    fn write_python(&mut self, sample: &PythonSample) -> Result<()> {
        writeln!(self.writer, "{}", sample.title)?;
        writeln!(self.writer, "{}", "=".repeat(40))?;
        writeln!(
            self.writer,
            "First {} Fibonacci numbers: {}",
            sample.fibonacci.len(),
            format_list(&sample.fibonacci)
        )?;
        writeln!(self.writer, "Squares: {}", format_list(&sample.squares))?;

        for entry in &sample.colors {
            let hex = entry.hex.to_string();
            writeln!(
                self.writer,
                "{}: {}",
                entry.name,
                self.formatter.swatch(&hex, entry.hex)
            )?;
        }
        Ok(())
    }

    fn write_javascript(&mut self, sample: &JavaScriptSample) -> Result<()> {
        writeln!(self.writer, "{}", sample.banner)?;
        writeln!(self.writer, "{}", sample.greeting)?;
        writeln!(self.writer, "Doubled: {}", format_list(&sample.doubled))?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_report(&mut self, report: &DemoReport) -> Result<()> {
        self.write_python(&report.python)?;
        writeln!(self.writer)?;
        self.write_javascript(&report.javascript)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatter: Box<dyn OutputFormatter>,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Text => Box::new(TextWriter::new(writer, formatter)),
    }
}

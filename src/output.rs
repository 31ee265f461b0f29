//! Rendering chain runs as JSON or terminal text.

use crate::chain::{ChainTrace, StepRecord};
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Present,
    Absent,
}

/// Serializable summary of one chain run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    pub initial: i64,
    pub steps: Vec<String>,
    pub result: Option<i64>,
    pub outcome: Outcome,
    pub invoked: usize,
    pub skipped: usize,
    pub failed_at: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<StepRecord>>,
}

impl ChainReport {
    /// Pure function to summarize a trace; `include_trace` keeps the per-step records.
    pub fn from_trace(trace: &ChainTrace, steps: Vec<String>, include_trace: bool) -> Self {
        let result = trace.result();
        Self {
            initial: trace.initial(),
            steps,
            result,
            outcome: if result.is_some() {
                Outcome::Present
            } else {
                Outcome::Absent
            },
            invoked: trace.invoked(),
            skipped: trace.skipped(),
            failed_at: trace.failed_at(),
            trace: include_trace.then(|| trace.records().to_vec()),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ChainReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ChainReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TextWriter<W: Write> {
    writer: W,
    plain: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            plain: false,
        }
    }

    /// Disable ANSI colors regardless of terminal detection.
    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.plain {
            text
        } else {
            text.as_str().color(color).to_string()
        }
    }

    fn write_steps_line(&mut self, report: &ChainReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "steps:   {} ({})",
            report.steps.len(),
            summarize_steps(&report.steps)
        )?;
        Ok(())
    }

    fn write_result_line(&mut self, report: &ChainReport) -> anyhow::Result<()> {
        let line = match (report.result, report.failed_at) {
            (Some(value), _) => self.paint(format!("Present({})", value), Color::Green),
            (None, Some(position)) => {
                let name = report
                    .steps
                    .get(position - 1)
                    .map(String::as_str)
                    .unwrap_or("?");
                format!(
                    "{} (step {} '{}' yielded no value; {} skipped)",
                    self.paint("Absent".to_string(), Color::Red),
                    position,
                    name,
                    report.skipped
                )
            }
            (None, None) => self.paint("Absent".to_string(), Color::Red),
        };
        writeln!(self.writer, "result:  {}", line)?;
        Ok(())
    }

    fn write_trace(&mut self, records: &[StepRecord]) -> anyhow::Result<()> {
        writeln!(self.writer, "trace:")?;
        for record in records {
            let text = record.format();
            let text = match record.output {
                Some(_) => text,
                None => self.paint(text, Color::Red),
            };
            writeln!(self.writer, "  {:>3}. {}", record.position, text)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_report(&mut self, report: &ChainReport) -> anyhow::Result<()> {
        writeln!(self.writer, "initial: {}", report.initial)?;
        self.write_steps_line(report)?;
        self.write_result_line(report)?;
        if let Some(records) = &report.trace {
            self.write_trace(records)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Compress runs of identical step names: `half x10`, `half, third x2`.
pub fn summarize_steps(steps: &[String]) -> String {
    if steps.is_empty() {
        return "none".to_string();
    }

    let mut runs: Vec<(&str, usize)> = Vec::new();
    for step in steps {
        match runs.last_mut() {
            Some((name, count)) if *name == step.as_str() => *count += 1,
            _ => runs.push((step.as_str(), 1)),
        }
    }

    runs.iter()
        .map(|(name, count)| match count {
            1 => name.to_string(),
            n => format!("{} x{}", name, n),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a writer for the requested format.
pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    plain: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Text => Box::new(TextWriter::new(writer).plain(plain)),
    }
}

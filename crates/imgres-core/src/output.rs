//! Exporting records to CSV, JSON or JSONL.
//!
//! CSV is the default and uses the columns
//! `Filename,Width,Height,Size_MB,Aspect_Ratio`. JSON and JSONL carry the same
//! fields with snake_case keys.

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::ImageRecord;

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Single JSON array
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

impl ExportFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }

    /// Name used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::JsonLines => "JSONL",
        }
    }
}

/// One CSV row. Field names double as the header.
#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Filename")]
    filename: &'a str,
    #[serde(rename = "Width")]
    width: u32,
    #[serde(rename = "Height")]
    height: u32,
    #[serde(rename = "Size_MB")]
    size_mb: f64,
    #[serde(rename = "Aspect_Ratio")]
    aspect_ratio: String,
}

/// One JSON object.
#[derive(Serialize)]
struct JsonRow<'a> {
    filename: &'a str,
    width: u32,
    height: u32,
    size_mb: f64,
    aspect_ratio: f64,
}

impl<'a> From<&'a ImageRecord> for CsvRow<'a> {
    fn from(r: &'a ImageRecord) -> Self {
        Self {
            filename: &r.filename,
            width: r.width,
            height: r.height,
            size_mb: r.size_mb,
            aspect_ratio: r.aspect_ratio_display(),
        }
    }
}

impl<'a> From<&'a ImageRecord> for JsonRow<'a> {
    fn from(r: &'a ImageRecord) -> Self {
        Self {
            filename: &r.filename,
            width: r.width,
            height: r.height,
            size_mb: r.size_mb,
            aspect_ratio: r.aspect_ratio(),
        }
    }
}

/// A writer that serializes records in one export format.
pub struct RecordWriter<W: Write> {
    writer: W,
    format: ExportFormat,
    pretty: bool,
    items_written: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Create a new record writer.
    ///
    /// `pretty` only affects the JSON format.
    pub fn new(writer: W, format: ExportFormat, pretty: bool) -> Self {
        Self {
            writer,
            format,
            pretty,
            items_written: 0,
        }
    }

    /// Write all records, in order, including the CSV header.
    pub fn write_all(&mut self, records: &[ImageRecord]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut csv = csv::Writer::from_writer(&mut self.writer);
                for record in records {
                    csv.serialize(CsvRow::from(record))?;
                }
                csv.flush()?;
            }
            ExportFormat::Json => {
                let rows: Vec<JsonRow<'_>> = records.iter().map(JsonRow::from).collect();
                if self.pretty {
                    serde_json::to_writer_pretty(&mut self.writer, &rows)?;
                } else {
                    serde_json::to_writer(&mut self.writer, &rows)?;
                }
                writeln!(self.writer)?;
            }
            ExportFormat::JsonLines => {
                // JSONL is never pretty-printed (one object per line)
                for record in records {
                    serde_json::to_writer(&mut self.writer, &JsonRow::from(record))?;
                    writeln!(self.writer)?;
                }
            }
        }
        self.items_written += records.len();
        Ok(())
    }

    /// Get the number of records written.
    pub fn items_written(&self) -> usize {
        self.items_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Writes record lists to files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exporter {
    format: ExportFormat,
    pretty: bool,
}

impl Exporter {
    pub fn new(format: ExportFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    /// Write `records` to `path`, replacing any existing file.
    ///
    /// An empty list writes nothing and returns 0.
    pub fn export(&self, records: &[ImageRecord], path: &Path) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let file = File::create(path)?;
        let mut writer = RecordWriter::new(BufWriter::new(file), self.format, self.pretty);
        writer.write_all(records)?;
        writer.flush()?;
        Ok(writer.items_written())
    }

    /// Like [`Exporter::export`], but failures are logged instead of returned.
    ///
    /// Returns the number of records written, or `None` on failure.
    pub fn export_or_warn(&self, records: &[ImageRecord], path: &Path) -> Option<usize> {
        match self.export(records, path) {
            Ok(n) => {
                tracing::debug!("Wrote {} record(s) to {:?}", n, path);
                Some(n)
            }
            Err(e) => {
                tracing::error!("Error creating {} report: {}", self.format.label(), e);
                None
            }
        }
    }
}

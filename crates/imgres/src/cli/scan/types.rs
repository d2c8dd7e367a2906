//! CLI enum types for the scan command: profile and export format.

use clap::ValueEnum;
use imgres_core::{ExportFormat, ProfileKind};

/// Scan profiles selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Profile {
    /// jpg, jpeg, png, gif, bmp, tiff, webp and heic, any letter case
    Images,
    /// .png and .PNG files only, with a large-file listing
    Png,
}

impl From<Profile> for ProfileKind {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Images => ProfileKind::Images,
            Profile::Png => ProfileKind::Png,
        }
    }
}

/// Supported export formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    /// Comma-separated values with a header row
    Csv,
    /// Single JSON array
    Json,
    /// One JSON object per line (newline-delimited)
    Jsonl,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => ExportFormat::Csv,
            Format::Json => ExportFormat::Json,
            Format::Jsonl => ExportFormat::JsonLines,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Csv => write!(f, "csv"),
            Format::Json => write!(f, "json"),
            Format::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Whether to write the export file after the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportChoice {
    /// Export without asking
    Always,
    /// Never export
    Never,
    /// Ask after the report is printed
    Ask,
}

impl ExportChoice {
    pub fn from_flags(export: bool, no_export: bool) -> Self {
        match (export, no_export) {
            (true, _) => ExportChoice::Always,
            (_, true) => ExportChoice::Never,
            _ => ExportChoice::Ask,
        }
    }
}

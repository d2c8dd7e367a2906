//! Fixed-width text report over scanned records.
//!
//! ```text
//! ================================================================================
//! IMAGE RESOLUTION REPORT
//! ================================================================================
//! Filename                            Width    Height   Size (MB)  Aspect Ratio
//! --------------------------------------------------------------------------------
//! a.png                               100      200      1.00       0.5
//! --------------------------------------------------------------------------------
//! Total files: 1
//! Total size: 1.00 MB
//!
//! Largest image: a.png (100x200)
//! Smallest image: a.png (100x200)
//! ```

use std::io::{self, Write};

use crate::config::ProfileConfig;
use crate::summary::ScanSummary;
use crate::types::ImageRecord;

/// Width of the horizontal rules.
pub const REPORT_WIDTH: usize = 80;

/// Per-profile decoration of the report.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    /// Heading between the top rules
    pub title: String,
    /// List files above this size under the summary
    pub large_file_threshold_mb: Option<f64>,
}

impl ReportStyle {
    pub fn from_profile(profile: &ProfileConfig) -> Self {
        Self {
            title: profile.title.clone(),
            large_file_threshold_mb: profile.large_file_threshold_mb,
        }
    }
}

/// A report ready to be rendered.
pub struct Report<'a> {
    style: &'a ReportStyle,
    records: &'a [ImageRecord],
    summary: ScanSummary<'a>,
}

impl<'a> Report<'a> {
    /// Build a report. Returns `None` when there is nothing to report.
    pub fn new(style: &'a ReportStyle, records: &'a [ImageRecord]) -> Option<Self> {
        let summary = ScanSummary::compute(records, style.large_file_threshold_mb)?;
        Some(Self {
            style,
            records,
            summary,
        })
    }

    /// Write the table and summary to `w`.
    pub fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let heavy = "=".repeat(REPORT_WIDTH);
        let light = "-".repeat(REPORT_WIDTH);

        writeln!(w, "{}", heavy)?;
        writeln!(w, "{}", self.style.title)?;
        writeln!(w, "{}", heavy)?;
        writeln!(
            w,
            "{:<35} {:<8} {:<8} {:<10} {}",
            "Filename", "Width", "Height", "Size (MB)", "Aspect Ratio"
        )?;
        writeln!(w, "{}", light)?;

        for record in self.records {
            writeln!(
                w,
                "{:<35} {:<8} {:<8} {:<10.2} {}",
                record.filename,
                record.width,
                record.height,
                record.size_mb,
                record.aspect_ratio_display()
            )?;
        }

        writeln!(w, "{}", light)?;
        writeln!(w, "Total files: {}", self.summary.total_files)?;
        writeln!(w, "Total size: {:.2} MB", self.summary.total_size_mb)?;

        writeln!(w)?;
        writeln!(
            w,
            "Largest image: {} ({})",
            self.summary.largest.filename,
            self.summary.largest.resolution()
        )?;
        writeln!(
            w,
            "Smallest image: {} ({})",
            self.summary.smallest.filename,
            self.summary.smallest.resolution()
        )?;

        if let Some(large) = &self.summary.large_files {
            writeln!(w)?;
            if large.files.is_empty() {
                writeln!(w, "Large files (> {:.2} MB): none", large.threshold_mb)?;
            } else {
                writeln!(
                    w,
                    "Large files (> {:.2} MB): {}",
                    large.threshold_mb,
                    large.files.len()
                )?;
                for record in &large.files {
                    writeln!(w, "  {} ({:.2} MB)", record.filename, record.size_mb)?;
                }
            }
        }

        Ok(())
    }

    /// Render into a string.
    pub fn render_to_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Render the report for `records` to `w`.
///
/// Writes nothing and returns `Ok(false)` when `records` is empty.
pub fn write_report<W: Write>(
    w: &mut W,
    style: &ReportStyle,
    records: &[ImageRecord],
) -> io::Result<bool> {
    match Report::new(style, records) {
        Some(report) => {
            report.render(w)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

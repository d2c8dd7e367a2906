//! Core data types produced by a scan.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::math;

/// Dimensions and size of one image that was read successfully.
///
/// Records only exist for files that passed the extension filter and whose
/// header could be read. They are never modified after extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// File name within the scanned folder
    pub filename: String,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// File size in megabytes (1 MB = 1024 * 1024 bytes)
    pub size_mb: f64,
}

impl ImageRecord {
    pub fn new(filename: impl Into<String>, width: u32, height: u32, size_mb: f64) -> Self {
        Self {
            filename: filename.into(),
            width,
            height,
            size_mb,
        }
    }

    /// Pixel count, used to rank images by size.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// `width / height` rounded to two decimals, 0 when the height is 0.
    pub fn aspect_ratio(&self) -> f64 {
        math::aspect_ratio(self.width, self.height)
    }

    /// Aspect ratio as printed in reports and CSV files.
    ///
    /// The zero-height value prints as a bare `0`.
    pub fn aspect_ratio_display(&self) -> String {
        if self.height == 0 {
            "0".to_string()
        } else {
            math::format_ratio(self.aspect_ratio())
        }
    }

    /// `WIDTHxHEIGHT`, e.g. `1920x1080`.
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// How listing the scan root went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    /// Candidates were found (possibly none of them readable)
    Found(usize),
    /// The folder does not exist
    RootMissing,
    /// The path exists but is not a folder
    NotADirectory,
    /// The folder could not be read
    Unreadable,
    /// The folder has no file passing the extension filter
    NoMatches,
}

/// Result of one pass over a folder.
#[derive(Debug)]
pub struct ScanOutcome {
    /// How listing went
    pub status: ListingStatus,

    /// Successfully read images, sorted by filename
    pub records: Vec<ImageRecord>,

    /// Files that matched the filter but could not be read
    pub failures: Vec<PipelineError>,
}

impl ScanOutcome {
    /// An outcome with no records, for a pass that stopped at listing.
    pub fn empty(status: ListingStatus) -> Self {
        Self {
            status,
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Whether any image was read.
    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }
}

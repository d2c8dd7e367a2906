//! Totals and extremes over a list of records.

use crate::types::ImageRecord;

/// Aggregates shown under the report table.
#[derive(Debug, Clone)]
pub struct ScanSummary<'a> {
    /// Number of records
    pub total_files: usize,
    /// Sum of all record sizes in megabytes
    pub total_size_mb: f64,
    /// Record with the most pixels (first one on ties)
    pub largest: &'a ImageRecord,
    /// Record with the fewest pixels (first one on ties)
    pub smallest: &'a ImageRecord,
    /// Files above the large-file threshold, when the profile sets one
    pub large_files: Option<LargeFiles<'a>>,
}

/// Records whose size exceeds a threshold.
#[derive(Debug, Clone)]
pub struct LargeFiles<'a> {
    pub threshold_mb: f64,
    pub files: Vec<&'a ImageRecord>,
}

impl<'a> ScanSummary<'a> {
    /// Summarize `records`. Returns `None` for an empty list.
    pub fn compute(
        records: &'a [ImageRecord],
        large_file_threshold_mb: Option<f64>,
    ) -> Option<Self> {
        let largest = largest_by_area(records)?;
        let smallest = smallest_by_area(records)?;

        Some(Self {
            total_files: records.len(),
            total_size_mb: total_size_mb(records),
            largest,
            smallest,
            large_files: large_file_threshold_mb.map(|threshold_mb| LargeFiles {
                threshold_mb,
                files: large_files(records, threshold_mb),
            }),
        })
    }
}

/// Sum of record sizes in megabytes.
pub fn total_size_mb(records: &[ImageRecord]) -> f64 {
    records.iter().map(|r| r.size_mb).sum()
}

/// First record with the maximum pixel area.
pub fn largest_by_area(records: &[ImageRecord]) -> Option<&ImageRecord> {
    // Iterator::max_by_key keeps the last maximum; ties must go to the first.
    records.iter().fold(None, |best: Option<&ImageRecord>, r| match best {
        Some(b) if b.area() >= r.area() => Some(b),
        _ => Some(r),
    })
}

/// First record with the minimum pixel area.
pub fn smallest_by_area(records: &[ImageRecord]) -> Option<&ImageRecord> {
    records.iter().min_by_key(|r| r.area())
}

/// Records strictly larger than `threshold_mb`, in input order.
pub fn large_files(records: &[ImageRecord], threshold_mb: f64) -> Vec<&ImageRecord> {
    records.iter().filter(|r| r.size_mb > threshold_mb).collect()
}

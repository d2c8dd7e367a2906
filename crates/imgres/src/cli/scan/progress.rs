//! Progress bar shown while image headers are read.

use imgres_core::ScanProgress;
use indicatif::{ProgressBar, ProgressStyle};

/// Drives an optional progress bar from scanner events.
pub struct ScanProgressBar {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ScanProgressBar {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Handle one scanner event.
    pub fn handle(&mut self, event: ScanProgress<'_>) {
        match event {
            ScanProgress::Started { total } => {
                if self.enabled {
                    self.bar = Some(create_progress_bar(total as u64));
                }
            }
            ScanProgress::File { filename, .. } => {
                if let Some(bar) = &self.bar {
                    bar.set_message(filename.to_string());
                    bar.inc(1);
                }
            }
            ScanProgress::Complete { read, failed } => {
                if let Some(bar) = self.bar.take() {
                    bar.finish_and_clear();
                }
                tracing::debug!("Read {} image(s), {} failed", read, failed);
            }
        }
    }
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb
}

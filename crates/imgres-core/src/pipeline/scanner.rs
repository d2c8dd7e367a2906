//! Pipeline orchestration: list a folder, then read every candidate once.

use std::path::Path;

use crate::config::ProfileConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::types::{ImageRecord, ListingStatus, ScanOutcome};

use super::dimensions::DimensionReader;
use super::discovery::{DiscoveredFile, FileDiscovery};

/// Progress notifications emitted during a pass.
#[derive(Debug, Clone, Copy)]
pub enum ScanProgress<'a> {
    /// Listing finished; `total` candidates will be read
    Started { total: usize },
    /// One candidate was handled
    File { filename: &'a str, ok: bool },
    /// Every candidate was handled
    Complete { read: usize, failed: usize },
}

/// Runs one scan pass for a profile.
pub struct Scanner {
    discovery: FileDiscovery,
    supported: String,
}

impl Scanner {
    /// Create a scanner for the given profile.
    pub fn new(profile: &ProfileConfig) -> Self {
        Self {
            discovery: FileDiscovery::new(profile),
            supported: profile.extensions_display(),
        }
    }

    /// List candidate files in `root`, sorted by file name.
    pub fn discover(&self, root: &Path) -> PipelineResult<Vec<DiscoveredFile>> {
        self.discovery.discover(root)
    }

    /// Read one candidate.
    pub fn extract(&self, file: &DiscoveredFile) -> PipelineResult<ImageRecord> {
        DimensionReader::extract(file)
    }

    /// Scan `root` and return every image that could be read.
    pub fn scan(&self, root: &Path) -> ScanOutcome {
        self.scan_with_progress(root, |_| {})
    }

    /// Scan `root`, reporting progress to `on_progress`.
    ///
    /// Nothing here is fatal. Listing problems are logged and give an empty
    /// outcome; unreadable files are logged, skipped and collected in
    /// [`ScanOutcome::failures`].
    pub fn scan_with_progress<F>(&self, root: &Path, mut on_progress: F) -> ScanOutcome
    where
        F: FnMut(ScanProgress<'_>),
    {
        let files = match self.discover(root) {
            Ok(files) => files,
            Err(e) => {
                let status = self.report_listing_error(&e);
                return ScanOutcome::empty(status);
            }
        };

        tracing::debug!("Found {} candidate(s) in {:?}", files.len(), root);
        on_progress(ScanProgress::Started { total: files.len() });

        let mut records = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for file in &files {
            match self.extract(file) {
                Ok(record) => {
                    records.push(record);
                    on_progress(ScanProgress::File {
                        filename: &file.filename,
                        ok: true,
                    });
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    failures.push(e);
                    on_progress(ScanProgress::File {
                        filename: &file.filename,
                        ok: false,
                    });
                }
            }
        }

        on_progress(ScanProgress::Complete {
            read: records.len(),
            failed: failures.len(),
        });

        ScanOutcome {
            status: ListingStatus::Found(files.len()),
            records,
            failures,
        }
    }

    /// Log a listing failure and map it to a status.
    fn report_listing_error(&self, err: &PipelineError) -> ListingStatus {
        match err {
            PipelineError::RootNotFound(_) => {
                tracing::error!("Error: {}", err);
                tracing::warn!("Please create the folder and place your images there.");
                ListingStatus::RootMissing
            }
            PipelineError::NotADirectory(_) => {
                tracing::error!("Error: {}", err);
                ListingStatus::NotADirectory
            }
            PipelineError::NoMatchingFiles(_) => {
                tracing::warn!("{}", err);
                tracing::warn!("Supported formats: {}", self.supported);
                ListingStatus::NoMatches
            }
            _ => {
                tracing::error!("{}", err);
                ListingStatus::Unreadable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_scan_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = Scanner::new(&ProfileConfig::images());

        let outcome = scanner.scan(&dir.path().join("images"));
        assert_eq!(outcome.status, ListingStatus::RootMissing);
        assert!(!outcome.has_records());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_root_is_empty() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        RgbImage::new(2, 2).save(locked.join("a.png")).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let enforced = std::fs::read_dir(&locked).is_err();
        let scanner = Scanner::new(&ProfileConfig::images());
        let mut calls = 0;
        let outcome = scanner.scan_with_progress(&locked, |_| calls += 1);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        if !enforced {
            return;
        }

        assert_eq!(outcome.status, ListingStatus::Unreadable);
        assert!(!outcome.has_records());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_scan_reports_progress_in_order() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::new(4, 4).save(dir.path().join("b.png")).unwrap();
        RgbImage::new(2, 2).save(dir.path().join("a.png")).unwrap();
        std::fs::write(dir.path().join("c.png"), b"junk").unwrap();

        let scanner = Scanner::new(&ProfileConfig::images());
        let mut events = Vec::new();
        let outcome = scanner.scan_with_progress(dir.path(), |event| {
            events.push(match event {
                ScanProgress::Started { total } => format!("start {total}"),
                ScanProgress::File { filename, ok } => format!("{filename} {ok}"),
                ScanProgress::Complete { read, failed } => format!("done {read}/{failed}"),
            });
        });

        assert_eq!(
            events,
            vec!["start 3", "a.png true", "b.png true", "c.png false", "done 2/1"]
        );
        assert_eq!(outcome.status, ListingStatus::Found(3));
        assert_eq!(outcome.failures.len(), 1);
    }

    #[test]
    fn test_no_progress_events_when_listing_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hi").unwrap();

        let scanner = Scanner::new(&ProfileConfig::images());
        let mut calls = 0;
        let outcome = scanner.scan_with_progress(dir.path(), |_| calls += 1);

        assert_eq!(calls, 0);
        assert_eq!(outcome.status, ListingStatus::NoMatches);
    }
}

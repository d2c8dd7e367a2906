//! File discovery for finding candidate images in a folder.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ProfileConfig;
use crate::error::{PipelineError, PipelineResult};

/// Finds the files in a folder whose extension a profile accepts.
pub struct FileDiscovery {
    extensions: Vec<String>,
    case_sensitive: bool,
}

/// A file that passed the extension filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File name within the scanned folder
    pub filename: String,
}

impl FileDiscovery {
    /// Create a discovery instance for a profile.
    pub fn new(profile: &ProfileConfig) -> Self {
        let extensions = profile
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.'))
            .map(|ext| {
                if profile.case_sensitive {
                    ext.to_string()
                } else {
                    ext.to_lowercase()
                }
            })
            .collect();
        Self {
            extensions,
            case_sensitive: profile.case_sensitive,
        }
    }

    /// List candidate files directly inside `root`, sorted by file name.
    ///
    /// Subfolders are not descended into. A missing root, a root that is not
    /// a folder, and a folder without matches are reported as errors so the
    /// caller can decide how to present them.
    pub fn discover(&self, root: &Path) -> PipelineResult<Vec<DiscoveredFile>> {
        if !root.exists() {
            return Err(PipelineError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(PipelineError::NotADirectory(root.to_path_buf()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(PipelineError::Listing {
                        path: root.to_path_buf(),
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.is_supported(entry.path()) {
                continue;
            }

            files.push(DiscoveredFile {
                path: entry.path().to_path_buf(),
                filename: entry.file_name().to_string_lossy().into_owned(),
            });
        }

        if files.is_empty() {
            return Err(PipelineError::NoMatchingFiles(root.to_path_buf()));
        }

        // Plain string order, so the report order does not depend on the OS
        files.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(files)
    }

    /// Check if a file has an accepted extension.
    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                if self.case_sensitive {
                    self.extensions.iter().any(|fmt| fmt == ext)
                } else {
                    let ext_lower = ext.to_lowercase();
                    self.extensions.iter().any(|fmt| *fmt == ext_lower)
                }
            })
            .unwrap_or(false)
    }
}

//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which scan profile to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Common image formats, matched case-insensitively
    #[default]
    Images,
    /// PNG files only, with a large-file listing
    Png,
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileKind::Images => write!(f, "images"),
            ProfileKind::Png => write!(f, "png"),
        }
    }
}

/// Scan settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Profile used when none is given on the command line
    pub profile: ProfileKind,

    /// Draw a progress bar while reading image headers
    pub show_progress: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            profile: ProfileKind::Images,
            show_progress: true,
        }
    }
}

/// One scan profile: which files to pick up and how to decorate the report.
///
/// A profile table in the config file replaces the built-in profile as a
/// whole, so every field except the threshold must be given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Recognized extensions, without the leading dot
    pub extensions: Vec<String>,

    /// Match extensions exactly instead of ignoring case.
    /// With `true`, only the spellings listed in `extensions` match.
    pub case_sensitive: bool,

    /// Folder scanned when no path is given
    pub default_root: PathBuf,

    /// Report heading
    pub title: String,

    /// Export file written in the working directory
    pub export_file: PathBuf,

    /// List files larger than this many megabytes under the summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_file_threshold_mb: Option<f64>,
}

impl ProfileConfig {
    /// Common image formats.
    pub fn images() -> Self {
        Self {
            extensions: ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp", "heic"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            case_sensitive: false,
            default_root: PathBuf::from("images"),
            title: "IMAGE RESOLUTION REPORT".to_string(),
            export_file: PathBuf::from("image_resolutions.csv"),
            large_file_threshold_mb: None,
        }
    }

    /// PNG only. `.png` and `.PNG` match, mixed-case spellings do not.
    pub fn png() -> Self {
        Self {
            extensions: vec!["png".to_string(), "PNG".to_string()],
            case_sensitive: true,
            default_root: PathBuf::from("."),
            title: "PNG RESOLUTION REPORT".to_string(),
            export_file: PathBuf::from("png_resolutions.csv"),
            large_file_threshold_mb: Some(2.0),
        }
    }

    /// Extensions as shown to users, e.g. `.jpg, .jpeg, .png`.
    pub fn extensions_display(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Both built-in profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    pub images: ProfileConfig,
    pub png: ProfileConfig,
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            images: ProfileConfig::images(),
            png: ProfileConfig::png(),
        }
    }
}

impl ProfilesConfig {
    /// Look up a profile by kind.
    pub fn get(&self, kind: ProfileKind) -> &ProfileConfig {
        match kind {
            ProfileKind::Images => &self.images,
            ProfileKind::Png => &self.png,
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Export format ("csv", "json" or "jsonl")
    pub format: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "csv".to_string(),
            pretty: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

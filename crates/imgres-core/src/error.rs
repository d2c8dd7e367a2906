//! Error types for the imgres scanning pipeline.
//!
//! Errors are organized by stage so diagnostics can name the folder or file
//! involved. Most pipeline errors are recoverable: the scanner logs them and
//! carries on with the rest of the pass.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for imgres operations.
#[derive(Error, Debug)]
pub enum ImgresError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The scan root does not exist
    #[error("Folder '{}' not found!", .0.display())]
    RootNotFound(PathBuf),

    /// The scan root exists but is not a directory
    #[error("'{}' is not a folder", .0.display())]
    NotADirectory(PathBuf),

    /// The scan root could not be listed
    #[error("Cannot list folder '{}': {message}", .path.display())]
    Listing { path: PathBuf, message: String },

    /// Nothing in the scan root passed the extension filter
    #[error("No supported image files found in '{}' folder.", .0.display())]
    NoMatchingFiles(PathBuf),

    /// Reading the image header failed
    #[error("Error processing {}: {message}", display_name(.path))]
    Decode { path: PathBuf, message: String },

    /// Reading the file size failed
    #[error("Error reading size of {}: {message}", display_name(.path))]
    Metadata { path: PathBuf, message: String },
}

/// File name portion of a path, for per-file diagnostics.
fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Convenience type alias for imgres results.
pub type Result<T> = std::result::Result<T, ImgresError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

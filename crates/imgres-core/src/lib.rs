//! imgres core - scan a folder of images and report their resolutions.
//!
//! One pass over a folder:
//!
//! ```text
//! List (extension filter) → Read headers → Summarize → Render table → Export (opt-in)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use imgres_core::{Config, Exporter, ProfileKind, ReportStyle, Scanner};
//!
//! let config = Config::load()?;
//! let profile = config.profile(ProfileKind::Images);
//!
//! let outcome = Scanner::new(profile).scan("photos".as_ref());
//! imgres_core::write_report(&mut std::io::stdout(), &ReportStyle::from_profile(profile), &outcome.records)?;
//! Exporter::default().export_or_warn(&outcome.records, &profile.export_file);
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod math;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod summary;
pub mod types;

// Re-exports for convenient access
pub use config::{Config, ProfileConfig, ProfileKind};
pub use error::{ConfigError, ImgresError, PipelineError, PipelineResult, Result};
pub use output::{ExportFormat, Exporter, RecordWriter};
pub use pipeline::{DiscoveredFile, ScanProgress, Scanner};
pub use report::{write_report, Report, ReportStyle};
pub use summary::ScanSummary;
pub use types::{ImageRecord, ListingStatus, ScanOutcome};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

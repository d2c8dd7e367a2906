//! Configuration validation.

use crate::error::ConfigError;
use crate::output::ExportFormat;

use super::{Config, ProfileConfig};

impl Config {
    /// Validate configuration values.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        validate_profile("profiles.images", &self.profiles.images)?;
        validate_profile("profiles.png", &self.profiles.png)?;

        if ExportFormat::parse(&self.export.format).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "export.format must be csv, json or jsonl (got {:?})",
                self.export.format
            )));
        }
        Ok(())
    }
}

fn validate_profile(name: &str, profile: &ProfileConfig) -> Result<(), ConfigError> {
    if profile.extensions.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{name}.extensions must not be empty"
        )));
    }
    if profile
        .extensions
        .iter()
        .any(|ext| ext.trim_start_matches('.').is_empty())
    {
        return Err(ConfigError::ValidationError(format!(
            "{name}.extensions must not contain blank entries"
        )));
    }
    if profile.title.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{name}.title must not be empty"
        )));
    }
    if profile.export_file.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{name}.export_file must not be empty"
        )));
    }
    if let Some(threshold) = profile.large_file_threshold_mb {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{name}.large_file_threshold_mb must be a non-negative number"
            )));
        }
    }
    Ok(())
}

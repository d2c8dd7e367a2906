//! The `imgres config` command for configuration management.

use clap::{Args, Subcommand};
use imgres_core::Config;
use std::fmt::Write as _;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display current configuration and the profile a plain `imgres` runs
    Show,

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            println!("{}", active_profile_summary(&config));
            println!("{}", config.to_toml()?);
        }

        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = Config::default().to_toml()?;
            std::fs::write(&path, toml)?;

            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// What a scan without `--profile` would use, as TOML comments so the output
/// of `config show` still parses.
fn active_profile_summary(config: &Config) -> String {
    let kind = config.scan.profile;
    let profile = config.profile(kind);
    let case = if profile.case_sensitive {
        "exact case"
    } else {
        "any case"
    };

    let mut out = String::new();
    let _ = writeln!(out, "# Active profile: {}", kind);
    let _ = writeln!(out, "#   folder: {}", config.scan_root(kind, None).display());
    let _ = writeln!(out, "#   extensions: {} ({})", profile.extensions_display(), case);
    let _ = writeln!(out, "#   export file: {}", profile.export_file.display());
    if let Some(threshold) = profile.large_file_threshold_mb {
        let _ = writeln!(out, "#   large files: over {:.2} MB", threshold);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgres_core::ProfileKind;

    #[test]
    fn summary_describes_default_profile() {
        let summary = active_profile_summary(&Config::default());
        assert!(summary.starts_with("# Active profile: images\n"));
        assert!(summary.contains("#   folder: images\n"));
        assert!(summary.contains(".heic (any case)"));
        assert!(summary.contains("#   export file: image_resolutions.csv\n"));
        assert!(!summary.contains("large files"));
    }

    #[test]
    fn summary_follows_configured_profile() {
        let mut config = Config::default();
        config.scan.profile = ProfileKind::Png;

        let summary = active_profile_summary(&config);
        assert!(summary.starts_with("# Active profile: png\n"));
        assert!(summary.contains(".png, .PNG (exact case)"));
        assert!(summary.contains("#   large files: over 2.00 MB\n"));
    }

    #[test]
    fn summary_is_all_comments() {
        let summary = active_profile_summary(&Config::default());
        assert!(summary.lines().all(|line| line.starts_with('#')));
    }
}

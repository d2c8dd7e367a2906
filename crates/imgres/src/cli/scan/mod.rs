//! Scanning a folder: the default command.

mod progress;
mod prompt;
pub mod types;

pub use types::{ExportChoice, Format, Profile};

use clap::Args;
use imgres_core::{
    write_report, Config, ExportFormat, Exporter, ProfileConfig, ReportStyle, ScanProgress,
    Scanner,
};
use std::io;
use std::path::PathBuf;

use progress::ScanProgressBar;

/// Arguments for scanning a folder.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Folder to scan (defaults to `images`, or `.` for the png profile)
    pub path: Option<PathBuf>,

    /// Scan profile (defaults to the config's scan.profile)
    #[arg(short, long, value_enum)]
    pub profile: Option<Profile>,

    /// Write the export file without asking
    #[arg(long, conflicts_with = "no_export")]
    pub export: bool,

    /// Never write the export file
    #[arg(long)]
    pub no_export: bool,

    /// Export file (defaults to the profile's export_file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (defaults to the config's export.format)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Execute a scan: list, read, report, then optionally export.
///
/// Missing folders, empty folders, unreadable files and failed exports are
/// reported as diagnostics; the command still finishes normally.
pub fn execute(args: ScanArgs, config: &Config) -> anyhow::Result<()> {
    let kind = args.profile.map(Into::into).unwrap_or(config.scan.profile);
    let profile = config.profile(kind);
    let root = config.scan_root(kind, args.path.as_deref());
    tracing::debug!("Using profile '{}'", kind);

    super::theme::print_banner();
    println!("Scanning folder: {}", root.display());

    let scanner = Scanner::new(profile);
    let mut progress = ScanProgressBar::new(config.scan.show_progress && !args.no_progress);
    let outcome = scanner.scan_with_progress(&root, |event| {
        if let Some(line) = announcement(&event) {
            println!("{}", line);
        }
        progress.handle(event);
    });

    let style = ReportStyle::from_profile(profile);
    write_report(&mut io::stdout().lock(), &style, &outcome.records)?;

    if outcome.has_records() {
        let format = export_format(&args, config);
        let path = export_path(&args, profile, format);
        let choice = ExportChoice::from_flags(args.export, args.no_export);

        if should_export(choice, format) {
            let exporter = Exporter::new(format, config.export.pretty);
            if exporter.export_or_warn(&outcome.records, &path).is_some() {
                println!("\n{} report saved as: {}", format.label(), path.display());
            }
        }
    }

    println!("\nDone!");
    Ok(())
}

/// Line printed once listing has found candidates, independent of the
/// progress bar.
fn announcement(event: &ScanProgress<'_>) -> Option<String> {
    match event {
        ScanProgress::Started { total } => {
            Some(format!("Scanning {} image files...\n", total))
        }
        _ => None,
    }
}

fn should_export(choice: ExportChoice, format: ExportFormat) -> bool {
    match choice {
        ExportChoice::Always => true,
        ExportChoice::Never => false,
        ExportChoice::Ask => prompt::confirm_export(format.label()),
    }
}

/// Format from the flag, then the config. Config validation guarantees the
/// configured name parses.
fn export_format(args: &ScanArgs, config: &Config) -> ExportFormat {
    args.format
        .map(Into::into)
        .or_else(|| ExportFormat::parse(&config.export.format))
        .unwrap_or_default()
}

/// Export file from the flag, else the profile default with an extension
/// matching the format.
fn export_path(args: &ScanArgs, profile: &ProfileConfig, format: ExportFormat) -> PathBuf {
    if let Some(output) = &args.output {
        return output.clone();
    }
    let default = profile.export_file.as_path();
    match format {
        ExportFormat::Csv => default.to_path_buf(),
        ExportFormat::Json => default.with_extension("json"),
        ExportFormat::JsonLines => default.with_extension("jsonl"),
    }
}

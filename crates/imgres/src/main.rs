//! imgres CLI - scan a folder of images and report their resolutions.
//!
//! # Usage
//!
//! ```bash
//! # Scan ./images (the default folder)
//! imgres
//!
//! # Scan another folder and write the CSV without asking
//! imgres ~/Pictures --export
//!
//! # PNG-only scan of the current folder
//! imgres --profile png
//!
//! # View configuration
//! imgres config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// imgres - scan a folder of images and report their resolutions.
#[derive(Parser, Debug)]
#[command(name = "imgres")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(flatten)]
    scan: cli::scan::ScanArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands. Without one, the folder is scanned.
#[derive(Subcommand, Debug)]
enum Commands {
    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match imgres_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `imgres config path`."
            );
            imgres_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("imgres v{}", imgres_core::VERSION);

    match cli.command {
        Some(Commands::Config(args)) => cli::config::execute(args),
        None => cli::scan::execute(cli.scan, &config),
    }
}

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use jpegscan::report::{report_paths, ReportConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// List the marker segments of JPEG files
#[derive(Parser, Debug)]
#[command(name = "jpegscan")]
#[command(version)]
#[command(about = "List the marker segments of JPEG files", long_about = None)]
struct Cli {
    /// Show offset each marker was found at
    #[arg(long)]
    offset: bool,

    /// Show size from header of each marker
    #[arg(long)]
    size: bool,

    /// Show size and offset in hex
    #[arg(long)]
    hex: bool,

    /// Append the long description of each marker
    #[arg(long)]
    describe: bool,

    /// JPEG files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

impl From<&Cli> for ReportConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            show_offset: cli.offset,
            show_size: cli.size,
            hex: cli.hex,
            describe: cli.describe,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = ReportConfig::from(&cli);
    let mut stdout = std::io::stdout().lock();
    let result = report_paths(&cli.files, &config, &mut stdout);
    // Exiting skips destructors
    let _ = stdout.flush();

    if let Err(err) = result {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

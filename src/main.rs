use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use sweeprs::core::telemetry::logging::init_logging;
use sweeprs::services::sweep::{sweep, DEFAULT_SUFFIX};

/// Recursively delete files whose name ends with a suffix.
#[derive(Debug, Parser)]
#[command(name = "sweeprs", version, about)]
struct Cli {
    /// Root directory to sweep.
    root: PathBuf,

    /// File name suffix selecting files for deletion.
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Print the full report as JSON instead of per-file lines.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let report = sweep(&cli.root, &cli.suffix)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for path in &report.deleted {
            println!("{}", path.display());
        }
        for failure in &report.failed {
            eprintln!("{}: {}", failure.path.display(), failure.error);
        }
    }

    Ok(())
}

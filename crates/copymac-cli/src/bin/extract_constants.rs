//! Extract script, region and text encoding constants from Mac OS headers

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use copymac::headers::HeaderExtractor;

/// Write script, region and encoding tables from Script.h and TextCommon.h
#[derive(Parser, Debug)]
#[command(name = "extract-constants")]
#[command(about, long_about = None, version)]
struct Args {
    /// Header files to read (Script.h, TextCommon.h)
    #[arg(required = true, num_args = 1.., value_name = "FILE.h")]
    files: Vec<PathBuf>,

    /// Directory to write CSV files into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    copymac::logging::init(args.verbose)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    for file in &args.files {
        HeaderExtractor::process(file, &args.output_dir)
            .with_context(|| format!("Failed to extract constants from {}", file.display()))?;
    }

    Ok(())
}

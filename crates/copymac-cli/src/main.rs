mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use commands::{SyncCommand, SyncOptions};
use copymac::config::SyncDirection;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    copymac::logging::init(cli.verbose)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let direction = SyncDirection::from(cli.direction);
    let options = SyncOptions::new(direction, cli.verbose, cli.dry_run);
    SyncCommand::execute(&options).with_context(|| format!("Failed to {direction}"))?;

    Ok(())
}

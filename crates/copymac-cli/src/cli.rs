use clap::{Parser, ValueEnum};
use copymac::config::SyncDirection;

/// Copy sources to and from a classic Mac OS guest
///
/// Push converts text to Mac OS Roman with CR line endings and sets Finder
/// type and creator codes; pull converts back to UTF-8 with LF line endings.
#[derive(Parser, Debug)]
#[command(name = "copymac")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Direction to copy
    #[arg(value_enum)]
    pub direction: Direction,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview changes without executing (dry-run)
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Direction {
    /// Copy from this checkout into the guest folder
    Push,
    /// Copy from the guest folder into this checkout
    Pull,
}

impl From<Direction> for SyncDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Push => Self::Push,
            Direction::Pull => Self::Pull,
        }
    }
}

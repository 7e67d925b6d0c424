//! Common types and utilities for command execution

use std::path::{Path, PathBuf};

use copymac::config::SyncDirection;

/// Execution options for the sync command
pub struct SyncOptions {
    /// Direction to copy
    pub direction: SyncDirection,
    /// Enable verbose output
    pub verbose: bool,
    /// Preview changes without applying (dry-run)
    pub dry_run: bool,
}

impl SyncOptions {
    /// Create new sync options
    #[must_use]
    pub const fn new(direction: SyncDirection, verbose: bool, dry_run: bool) -> Self {
        Self {
            direction,
            verbose,
            dry_run,
        }
    }
}

/// Checkout the tool was built from, two levels above this crate
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

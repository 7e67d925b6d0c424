//! One-pass synchronization between the host checkout and the guest folder
//!
//! For each configured subdirectory the engine converts every source file
//! with a recognized suffix into the destination, tags it on push, then
//! deletes destination files with a recognized suffix that the source no
//! longer has. Files with other suffixes are never created or removed.

mod actions;
mod executor;
mod listing;
mod orchestrator;
mod reporting;

// Public exports for CLI integration
pub use actions::{SkipReason, SyncAction, SyncActionResolver};
pub use executor::FileOperationExecutor;
pub use listing::{EntryKind, ListedEntry, list_entries};
pub use orchestrator::SyncEngine;
pub use reporting::SyncReporter;

/// Synchronization result with statistics
#[derive(Debug, Clone, Default)]
pub struct SyncResult {
    /// Files written with new content
    pub converted: usize,
    /// Files whose destination already had identical content
    pub unchanged: usize,
    /// Stale destination files removed
    pub deleted: usize,
    /// Files that received a `FinderInfo` tag
    pub tagged: usize,
    /// Entries left alone
    pub skipped: usize,
    /// Skip reasons with counts
    pub skip_reasons: std::collections::HashMap<String, usize>,
}

impl SyncResult {
    /// Total operations performed
    #[must_use]
    pub const fn total_operations(&self) -> usize {
        self.converted + self.deleted
    }
}

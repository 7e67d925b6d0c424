//! Sync orchestration - coordinates the sync workflow

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::SyncResult;
use super::actions::SyncActionResolver;
use super::executor::FileOperationExecutor;
use super::listing::list_entries;
use crate::config::{SyncDirection, SyncLayout};
use crate::error::{IoContext, Result};
use crate::tagging::FileTagger;

/// Main sync engine
pub struct SyncEngine {
    layout: SyncLayout,
    direction: SyncDirection,
    dry_run: bool,
}

impl SyncEngine {
    /// Create a new sync engine
    #[must_use]
    pub const fn new(layout: SyncLayout, direction: SyncDirection) -> Self {
        Self {
            layout,
            direction,
            dry_run: false,
        }
    }

    /// Report actions without touching the filesystem
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Execute the sync operation.
    ///
    /// Subdirectories are processed in layout order. The first failure
    /// aborts the run; files already written stay in place and a later run
    /// converges.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory, file or tag operation fails.
    pub fn sync(&self, tagger: &dyn FileTagger) -> Result<SyncResult> {
        let (source_root, dest_root) = self.layout.roots(self.direction);
        tracing::info!(
            direction = %self.direction,
            source = %source_root.display(),
            dest = %dest_root.display(),
            dry_run = self.dry_run,
            "Starting sync"
        );

        let executor = FileOperationExecutor::new(self.direction, self.dry_run, tagger);
        let mut result = SyncResult::default();

        for subdir in &self.layout.subdirs {
            self.sync_subdir(subdir, source_root, dest_root, &executor, &mut result)?;
        }

        tracing::info!(operations = result.total_operations(), "Sync finished");
        Ok(result)
    }

    fn sync_subdir(
        &self,
        subdir: &Path,
        source_root: &Path,
        dest_root: &Path,
        executor: &FileOperationExecutor<'_>,
        result: &mut SyncResult,
    ) -> Result<()> {
        let source_subdir = source_root.join(subdir);
        let dest_subdir = dest_root.join(subdir);
        tracing::debug!(subdir = %subdir.display(), "Syncing subdirectory");

        if !self.dry_run {
            fs::create_dir_all(&dest_subdir)
                .io_context("Failed to create directory", &dest_subdir)?;
        }

        let mut expected = HashSet::new();
        for entry in list_entries(&source_subdir)? {
            let action = SyncActionResolver::resolve_source(
                &entry,
                &dest_subdir,
                &self.layout.rules,
                &mut expected,
            );
            executor.execute(&action, subdir, result)?;
        }

        // In a dry run the destination may not exist yet
        if self.dry_run && !dest_subdir.is_dir() {
            return Ok(());
        }

        for entry in list_entries(&dest_subdir)? {
            if let Some(action) =
                SyncActionResolver::resolve_destination(&entry, &self.layout.rules, &expected)
            {
                executor.execute(&action, subdir, result)?;
            }
        }

        Ok(())
    }
}

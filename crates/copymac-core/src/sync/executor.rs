//! File operations executor

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::SyncResult;
use super::actions::{SkipReason, SyncAction};
use crate::config::{FileTypeRule, SyncDirection};
use crate::convert::Converter;
use crate::error::{Error, IoContext, Result};
use crate::tagging::FileTagger;

/// Executes sync actions and prints a progress line for each one
pub struct FileOperationExecutor<'a> {
    direction: SyncDirection,
    dry_run: bool,
    tagger: &'a dyn FileTagger,
}

impl<'a> FileOperationExecutor<'a> {
    /// Create a new executor
    #[must_use]
    pub const fn new(direction: SyncDirection, dry_run: bool, tagger: &'a dyn FileTagger) -> Self {
        Self {
            direction,
            dry_run,
            tagger,
        }
    }

    /// Execute a sync action. `subdir` is only used to label progress output.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, converting, writing, tagging or deleting
    /// fails. Nothing is retried.
    pub fn execute(&self, action: &SyncAction, subdir: &Path, result: &mut SyncResult) -> Result<()> {
        match action {
            SyncAction::Convert { source, dest, rule } => {
                self.convert_file(source, dest, rule, subdir, result)?;
            }
            SyncAction::Delete { path } => {
                let label = display_path(subdir, path);
                if self.dry_run {
                    println!("[DRY RUN] Would delete {}", label.display());
                } else {
                    println!("Delete {}", label.display());
                    fs::remove_file(path).io_context("Failed to delete", path)?;
                }
                result.deleted += 1;
            }
            SyncAction::Skip { path, reason } => {
                let label = display_path(subdir, path);
                println!("Skip {} ({})", label.display(), reason.as_str());
                if *reason == SkipReason::NonUtf8Name {
                    tracing::warn!(path = %path.display(), "Skipping file with non-UTF-8 name");
                } else {
                    tracing::debug!(path = %path.display(), reason = reason.as_str(), "Skipping");
                }
                result.skipped += 1;
                *result
                    .skip_reasons
                    .entry(reason.as_str().to_string())
                    .or_insert(0) += 1;
            }
        }
        Ok(())
    }

    fn convert_file(
        &self,
        source: &Path,
        dest: &Path,
        rule: &FileTypeRule,
        subdir: &Path,
        result: &mut SyncResult,
    ) -> Result<()> {
        let converter = Converter::new(rule.kind, self.direction);
        let label = display_path(subdir, dest);

        let input = fs::read(source).io_context("Failed to read", source)?;
        let output = converter
            .convert(&input)
            .map_err(|source_err| Error::Convert {
                path: source.to_path_buf(),
                source: source_err,
            })?;

        let unchanged = Self::has_content(dest, &output)?;

        if self.dry_run {
            if unchanged {
                println!("[DRY RUN] Unchanged {}", label.display());
            } else {
                println!("[DRY RUN] Would write {} {}", converter.name(), label.display());
            }
        } else {
            if unchanged {
                println!("Unchanged {}", label.display());
            } else {
                println!("{} {}", converter.name(), label.display());
                fs::write(dest, &output).io_context("Failed to write", dest)?;
            }

            if self.direction.tags_destination() {
                let info = rule.finder_info();
                self.tagger.set_file_tag(dest, info.as_bytes())?;
                tracing::debug!(
                    dest = %dest.display(),
                    file_type = %String::from_utf8_lossy(&info.file_type()),
                    creator = %String::from_utf8_lossy(&info.creator()),
                    "Tagged"
                );
                result.tagged += 1;
            }
        }

        if unchanged {
            result.unchanged += 1;
        } else {
            result.converted += 1;
        }
        Ok(())
    }

    /// Whether `path` already holds exactly `content`
    fn has_content(path: &Path, content: &[u8]) -> Result<bool> {
        match fs::read(path) {
            Ok(existing) => Ok(existing == content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io("Failed to read", path, e)),
        }
    }
}

/// `subdir/name` for progress output, without a leading `./`
fn display_path(subdir: &Path, path: &Path) -> PathBuf {
    let name = path.file_name().unwrap_or(path.as_os_str());
    if subdir == Path::new(".") {
        PathBuf::from(name)
    } else {
        subdir.join(name)
    }
}

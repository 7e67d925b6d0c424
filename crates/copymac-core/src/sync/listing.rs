//! Flat directory listing
//!
//! Only the direct children of a synced subdirectory are considered; nested
//! directories are listed as entries but never descended into.

use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

/// Kind of a listed entry, after following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Anything else (sockets, fifos, ...)
    Other,
    /// Symlink whose target is missing or unreadable
    BrokenLink,
}

impl EntryKind {
    fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_file() {
            Self::File
        } else if file_type.is_dir() {
            Self::Directory
        } else {
            Self::Other
        }
    }

    /// Kind of the entry, looking through symlinks
    fn of(entry: &DirEntry) -> Self {
        if !entry.path_is_symlink() {
            return Self::from_file_type(entry.file_type());
        }
        match fs::metadata(entry.path()) {
            Ok(meta) => Self::from_file_type(meta.file_type()),
            Err(e) => {
                tracing::debug!(path = %entry.path().display(), error = %e, "Dangling symlink");
                Self::BrokenLink
            }
        }
    }
}

/// A direct child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// Full path of the entry
    pub path: PathBuf,
    /// File name, `None` when it is not valid UTF-8
    pub name: Option<String>,
    /// Entry kind
    pub kind: EntryKind,
}

/// List the direct children of `dir`, sorted by file name.
///
/// # Errors
///
/// Returns an error if the directory does not exist or cannot be read.
pub fn list_entries(dir: &Path) -> Result<Vec<ListedEntry>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| Error::Walk {
            path: dir.to_path_buf(),
            source,
        })?;

        let kind = EntryKind::of(&entry);
        entries.push(ListedEntry {
            name: entry.file_name().to_str().map(str::to_string),
            path: entry.into_path(),
            kind,
        });
    }

    Ok(entries)
}

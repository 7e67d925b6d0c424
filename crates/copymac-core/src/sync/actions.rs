//! Sync action determination logic

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::listing::{EntryKind, ListedEntry};
use crate::config::{FileTypeRule, RuleTable};

/// Why an entry was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Suffix has no rule
    UnrecognizedSuffix,
    /// Entry is a directory or special file
    NotAFile,
    /// File name is not valid UTF-8
    NonUtf8Name,
}

impl SkipReason {
    /// Human-readable reason
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnrecognizedSuffix => "unrecognized suffix",
            Self::NotAFile => "not a file",
            Self::NonUtf8Name => "non-UTF-8 name",
        }
    }
}

/// Sync action to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Convert a source file into the destination
    Convert {
        /// Source file path
        source: PathBuf,
        /// Destination file path
        dest: PathBuf,
        /// Rule matched by the file's suffix
        rule: FileTypeRule,
    },
    /// Remove a destination file whose source is gone
    Delete {
        /// Destination file path
        path: PathBuf,
    },
    /// Leave this entry alone
    Skip {
        /// Entry path
        path: PathBuf,
        /// Reason for skipping
        reason: SkipReason,
    },
}

/// Resolves listed entries into sync actions
pub struct SyncActionResolver;

impl SyncActionResolver {
    /// Decide what to do with an entry of the source subdirectory.
    ///
    /// Files with a recognized suffix are converted into `dest_subdir` under
    /// the same name and their name is added to `expected`.
    pub fn resolve_source(
        entry: &ListedEntry,
        dest_subdir: &Path,
        rules: &RuleTable,
        expected: &mut HashSet<String>,
    ) -> SyncAction {
        let Some(name) = entry.name.as_deref() else {
            return Self::skip(entry, SkipReason::NonUtf8Name);
        };
        let Some(rule) = rules.lookup(name) else {
            return Self::skip(entry, SkipReason::UnrecognizedSuffix);
        };
        if entry.kind != EntryKind::File {
            return Self::skip(entry, SkipReason::NotAFile);
        }

        expected.insert(name.to_string());
        SyncAction::Convert {
            source: entry.path.clone(),
            dest: dest_subdir.join(name),
            rule: *rule,
        }
    }

    /// Decide whether an entry of the destination subdirectory is stale.
    ///
    /// Only files (or dangling links) with a recognized suffix that were not
    /// produced by this run are deleted. Everything else is left untouched and
    /// yields `None`.
    #[must_use]
    pub fn resolve_destination(
        entry: &ListedEntry,
        rules: &RuleTable,
        expected: &HashSet<String>,
    ) -> Option<SyncAction> {
        let name = entry.name.as_deref()?;
        let removable = matches!(entry.kind, EntryKind::File | EntryKind::BrokenLink);
        let stale = removable
            && rules.is_recognized(name)
            && !expected.contains(name);

        stale.then(|| SyncAction::Delete {
            path: entry.path.clone(),
        })
    }

    fn skip(entry: &ListedEntry, reason: SkipReason) -> SyncAction {
        SyncAction::Skip {
            path: entry.path.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterKind;

    fn entry(name: &str, kind: EntryKind) -> ListedEntry {
        ListedEntry {
            path: PathBuf::from("/src").join(name),
            name: Some(name.to_string()),
            kind,
        }
    }

    #[test]
    fn test_recognized_file_is_converted() {
        let rules = RuleTable::standard();
        let mut expected = HashSet::new();

        let action = SyncActionResolver::resolve_source(
            &entry("main.c", EntryKind::File),
            Path::new("/dest"),
            &rules,
            &mut expected,
        );

        match action {
            SyncAction::Convert { source, dest, rule } => {
                assert_eq!(source, PathBuf::from("/src/main.c"));
                assert_eq!(dest, PathBuf::from("/dest/main.c"));
                assert_eq!(rule.kind, ConverterKind::Text);
            }
            other => panic!("expected Convert, got {other:?}"),
        }
        assert!(expected.contains("main.c"));
    }

    #[test]
    fn test_unrecognized_file_is_skipped() {
        let rules = RuleTable::standard();
        let mut expected = HashSet::new();

        let action = SyncActionResolver::resolve_source(
            &entry("README.md", EntryKind::File),
            Path::new("/dest"),
            &rules,
            &mut expected,
        );

        assert_eq!(
            action,
            SyncAction::Skip {
                path: PathBuf::from("/src/README.md"),
                reason: SkipReason::UnrecognizedSuffix,
            }
        );
        assert!(expected.is_empty());
    }

    #[test]
    fn test_directory_with_recognized_suffix_is_skipped() {
        let rules = RuleTable::standard();
        let mut expected = HashSet::new();

        let action = SyncActionResolver::resolve_source(
            &entry("odd.c", EntryKind::Directory),
            Path::new("/dest"),
            &rules,
            &mut expected,
        );

        assert!(matches!(
            action,
            SyncAction::Skip {
                reason: SkipReason::NotAFile,
                ..
            }
        ));
        assert!(expected.is_empty());
    }

    #[test]
    fn test_non_utf8_name_is_skipped() {
        let rules = RuleTable::standard();
        let mut expected = HashSet::new();
        let listed = ListedEntry {
            path: PathBuf::from("/src/x"),
            name: None,
            kind: EntryKind::File,
        };

        let action =
            SyncActionResolver::resolve_source(&listed, Path::new("/dest"), &rules, &mut expected);
        assert!(matches!(
            action,
            SyncAction::Skip {
                reason: SkipReason::NonUtf8Name,
                ..
            }
        ));
    }

    #[test]
    fn test_stale_recognized_file_is_deleted() {
        let rules = RuleTable::standard();
        let expected = HashSet::from(["kept.c".to_string()]);

        let stale = SyncActionResolver::resolve_destination(
            &entry("gone.h", EntryKind::File),
            &rules,
            &expected,
        );
        assert_eq!(
            stale,
            Some(SyncAction::Delete {
                path: PathBuf::from("/src/gone.h")
            })
        );

        let kept = SyncActionResolver::resolve_destination(
            &entry("kept.c", EntryKind::File),
            &rules,
            &expected,
        );
        assert_eq!(kept, None);
    }

    #[test]
    fn test_stale_dangling_link_is_deleted() {
        let action = SyncActionResolver::resolve_destination(
            &entry("old.r", EntryKind::BrokenLink),
            &RuleTable::standard(),
            &HashSet::new(),
        );
        assert!(matches!(action, Some(SyncAction::Delete { .. })));
    }

    #[test]
    fn test_dangling_source_link_is_skipped() {
        let mut expected = HashSet::new();
        let action = SyncActionResolver::resolve_source(
            &entry("gone.c", EntryKind::BrokenLink),
            Path::new("/dest"),
            &RuleTable::standard(),
            &mut expected,
        );

        assert!(matches!(
            action,
            SyncAction::Skip {
                reason: SkipReason::NotAFile,
                ..
            }
        ));
        assert!(expected.is_empty());
    }

    #[test]
    fn test_destination_leaves_unrecognized_and_directories() {
        let rules = RuleTable::standard();
        let expected = HashSet::new();

        for listed in [
            entry("notes.txt", EntryKind::File),
            entry("build.c", EntryKind::Directory),
        ] {
            assert_eq!(
                SyncActionResolver::resolve_destination(&listed, &rules, &expected),
                None
            );
        }
    }
}

//! Configuration types and structures

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::tagging::FinderInfo;

/// Name of the shared folder inside the user's home directory
pub const GUEST_DIR_NAME: &str = "SyncFiles";

/// Subdirectories synchronized, in order
pub const STANDARD_SUBDIRS: [&str; 4] = [".", "macos", "sync", "lib"];

/// Suffixes converted as text sources
pub const TEXT_SUFFIXES: [&str; 3] = [".c", ".h", ".r"];

/// BBEdit creator code, used for every text source
pub const TEXT_CREATOR: OsType = *b"R*ch";

/// Four-character code used for Mac OS file types and creators
pub type OsType = [u8; 4];

/// Sync direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// Copy from the host checkout to the guest folder
    Push,
    /// Copy from the guest folder back into the host checkout
    Pull,
}

impl SyncDirection {
    /// Whether destination files receive a `FinderInfo` tag
    #[must_use]
    pub const fn tags_destination(self) -> bool {
        matches!(self, Self::Push)
    }

    /// Command name as typed on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pull => "pull",
        }
    }
}

impl fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How file content is transformed on the way to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterKind {
    /// Re-encode and rewrite line endings
    Text,
    /// Copy bytes verbatim
    Binary,
}

/// Conversion and metadata for one file suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTypeRule {
    /// Converter applied to the content
    pub kind: ConverterKind,
    /// Mac OS file type
    pub file_type: OsType,
    /// Mac OS creator
    pub creator: OsType,
}

impl FileTypeRule {
    /// Create a new rule
    #[must_use]
    pub const fn new(kind: ConverterKind, file_type: OsType, creator: OsType) -> Self {
        Self {
            kind,
            file_type,
            creator,
        }
    }

    /// Metadata block attached to files matching this rule
    #[must_use]
    pub const fn finder_info(&self) -> FinderInfo {
        FinderInfo::new(self.file_type, self.creator)
    }
}

/// Suffix to rule mapping. Each suffix maps to at most one rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleTable {
    rules: BTreeMap<String, FileTypeRule>,
}

impl RuleTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: C, header and Rez sources as BBEdit text, and
    /// CodeWarrior project files as binary data.
    #[must_use]
    pub fn standard() -> Self {
        let text = FileTypeRule::new(ConverterKind::Text, *b"TEXT", TEXT_CREATOR);
        let mut table = Self::new();
        for suffix in TEXT_SUFFIXES {
            table.insert(suffix, text);
        }
        table.insert(
            ".mcp",
            FileTypeRule::new(ConverterKind::Binary, *b"MMPr", *b"CWIE"),
        );
        table
    }

    /// Add or replace the rule for `suffix`, returning the replaced rule
    pub fn insert(&mut self, suffix: &str, rule: FileTypeRule) -> Option<FileTypeRule> {
        self.rules.insert(suffix.to_string(), rule)
    }

    /// Rule for an exact, case-sensitive suffix such as `.c`
    #[must_use]
    pub fn get(&self, suffix: &str) -> Option<&FileTypeRule> {
        self.rules.get(suffix)
    }

    /// Rule for a file name, looked up by its suffix
    #[must_use]
    pub fn lookup(&self, file_name: &str) -> Option<&FileTypeRule> {
        suffix_of(file_name).and_then(|suffix| self.get(suffix))
    }

    /// Whether a file name carries a recognized suffix
    #[must_use]
    pub fn is_recognized(&self, file_name: &str) -> bool {
        self.lookup(file_name).is_some()
    }

    /// Iterate over `(suffix, rule)` pairs in suffix order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileTypeRule)> {
        self.rules.iter().map(|(suffix, rule)| (suffix.as_str(), rule))
    }

    /// Number of suffixes in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Suffix of a file name, including the dot.
///
/// A leading dot alone does not start a suffix (`.profile` has none), and a
/// name ending in a dot has none either.
#[must_use]
pub fn suffix_of(file_name: &str) -> Option<&str> {
    let idx = file_name.rfind('.')?;
    if idx == 0 || idx + 1 == file_name.len() {
        return None;
    }
    Some(&file_name[idx..])
}

/// Everything a sync run needs to know about the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncLayout {
    /// Host checkout root
    pub local_root: PathBuf,
    /// Guest shared folder root
    pub guest_root: PathBuf,
    /// Subdirectories to sync, relative to both roots, in order
    pub subdirs: Vec<PathBuf>,
    /// Suffix rules
    pub rules: RuleTable,
}

impl SyncLayout {
    /// Standard subdirectories and rule table over the given roots
    #[must_use]
    pub fn standard(local_root: impl Into<PathBuf>, guest_root: impl Into<PathBuf>) -> Self {
        Self {
            local_root: local_root.into(),
            guest_root: guest_root.into(),
            subdirs: STANDARD_SUBDIRS.into_iter().map(PathBuf::from).collect(),
            rules: RuleTable::standard(),
        }
    }

    /// `(source_root, dest_root)` for a direction
    #[must_use]
    pub fn roots(&self, direction: SyncDirection) -> (&Path, &Path) {
        match direction {
            SyncDirection::Push => (&self.local_root, &self.guest_root),
            SyncDirection::Pull => (&self.guest_root, &self.local_root),
        }
    }
}

/// Overrides read from a config file. Unset fields keep the standard layout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Host checkout root
    #[serde(default)]
    pub local_root: Option<PathBuf>,

    /// Guest shared folder root
    #[serde(default)]
    pub guest_root: Option<PathBuf>,

    /// Subdirectories to sync, in order
    #[serde(default)]
    pub subdirs: Option<Vec<PathBuf>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_of() {
        assert_eq!(suffix_of("main.c"), Some(".c"));
        assert_eq!(suffix_of("archive.tar.gz"), Some(".gz"));
        assert_eq!(suffix_of("Makefile"), None);
        assert_eq!(suffix_of(".profile"), None);
        assert_eq!(suffix_of("trailing."), None);
        assert_eq!(suffix_of("..c"), Some(".c"));
    }

    #[test]
    fn test_standard_rules() {
        let rules = RuleTable::standard();
        assert_eq!(rules.len(), 4);

        let text = rules.lookup("convert.c").unwrap();
        assert_eq!(text.kind, ConverterKind::Text);
        assert_eq!(&text.file_type, b"TEXT");
        assert_eq!(&text.creator, b"R*ch");

        let project = rules.lookup("Project.mcp").unwrap();
        assert_eq!(project.kind, ConverterKind::Binary);
        assert_eq!(&project.file_type, b"MMPr");
        assert_eq!(&project.creator, b"CWIE");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let rules = RuleTable::standard();
        assert!(rules.is_recognized("defs.h"));
        assert!(!rules.is_recognized("DEFS.H"));
        assert!(!rules.is_recognized("notes.txt"));
    }

    #[test]
    fn test_insert_replaces_existing_rule() {
        let mut rules = RuleTable::standard();
        let replaced = rules.insert(
            ".c",
            FileTypeRule::new(ConverterKind::Binary, *b"BINA", *b"????"),
        );
        assert!(replaced.is_some());
        assert_eq!(rules.len(), 4);
        assert_eq!(rules.get(".c").unwrap().kind, ConverterKind::Binary);
    }

    #[test]
    fn test_layout_roots_by_direction() {
        let layout = SyncLayout::standard("/host", "/guest");
        assert_eq!(
            layout.roots(SyncDirection::Push),
            (Path::new("/host"), Path::new("/guest"))
        );
        assert_eq!(
            layout.roots(SyncDirection::Pull),
            (Path::new("/guest"), Path::new("/host"))
        );
        assert_eq!(layout.subdirs[0], PathBuf::from("."));
        assert_eq!(layout.subdirs.len(), 4);
    }

    #[test]
    fn test_direction_display_and_tagging() {
        assert_eq!(SyncDirection::Push.to_string(), "push");
        assert_eq!(SyncDirection::Pull.to_string(), "pull");
        assert!(SyncDirection::Push.tags_destination());
        assert!(!SyncDirection::Pull.tags_destination());
    }

    #[test]
    fn test_config_file_parse() {
        let config: ConfigFile = toml::from_str(
            r#"
            guest_root = "/Volumes/Shared"
            subdirs = [".", "src"]
            "#,
        )
        .unwrap();

        assert_eq!(config.local_root, None);
        assert_eq!(config.guest_root, Some(PathBuf::from("/Volumes/Shared")));
        assert_eq!(
            config.subdirs,
            Some(vec![PathBuf::from("."), PathBuf::from("src")])
        );
    }

    #[test]
    fn test_config_file_rejects_unknown_keys() {
        let result: Result<ConfigFile, _> = toml::from_str("suffixes = [\".txt\"]");
        assert!(result.is_err());
    }
}

//! Script, region and text encoding constants from Mac OS headers
//!
//! `Script.h` yields `script.csv` and `region.csv`; `TextCommon.h` yields
//! `encoding.csv`. Each table is a contiguous run of enum members selected
//! by name prefix.

mod csv;
mod parse;

pub use csv::{render, write};
pub use parse::{EnumItem, index_of, list_enums, slice};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, IoContext, Result};

/// One CSV table produced from a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Output file name
    pub file_name: &'static str,
    /// Identifier prefix selecting members
    pub prefix: &'static str,
    /// Inclusive boundaries, or `None` to keep every member
    pub range: Option<(&'static str, &'static str)>,
}

const SCRIPT_TABLES: &[TableSpec] = &[
    TableSpec {
        file_name: "script.csv",
        prefix: "sm",
        range: Some(("smRoman", "smUninterp")),
    },
    TableSpec {
        file_name: "region.csv",
        prefix: "ver",
        range: Some(("verUS", "verGreenland")),
    },
];

const TEXT_COMMON_TABLES: &[TableSpec] = &[TableSpec {
    file_name: "encoding.csv",
    prefix: "kTextEncoding",
    range: None,
}];

/// Headers the extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// `Script.h`
    Script,
    /// `TextCommon.h`
    TextCommon,
}

impl HeaderKind {
    /// Identify a header by its base name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHeader`] for any other file name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match name.as_str() {
            "script.h" => Ok(Self::Script),
            "textcommon.h" => Ok(Self::TextCommon),
            _ => Err(Error::UnknownHeader {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Tables written for this header, in output order
    #[must_use]
    pub const fn tables(self) -> &'static [TableSpec] {
        match self {
            Self::Script => SCRIPT_TABLES,
            Self::TextCommon => TEXT_COMMON_TABLES,
        }
    }
}

/// Header constant extractor
pub struct HeaderExtractor;

impl HeaderExtractor {
    /// Select the members of one table from the full enum list
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingIdentifier`] if a range boundary is absent.
    pub fn select(items: &[EnumItem], table: &TableSpec) -> Result<Vec<EnumItem>> {
        let matching: Vec<EnumItem> = items
            .iter()
            .filter(|item| item.name.starts_with(table.prefix))
            .cloned()
            .collect();
        match table.range {
            Some((first, last)) => Ok(slice(&matching, first, last)?.to_vec()),
            None => Ok(matching),
        }
    }

    /// Extract every table for the header at `path` into `out_dir`.
    ///
    /// Tables are written one at a time, so a missing boundary in a later
    /// table leaves the earlier CSV files in place.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown header name, an unreadable file, a
    /// missing range boundary or a failed write.
    pub fn process(path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let kind = HeaderKind::from_path(path)?;
        let data = fs::read(path).io_context("Failed to read", path)?;
        let items = list_enums(&data)?;
        tracing::debug!(path = %path.display(), ?kind, members = items.len(), "Parsed header");

        let mut written = Vec::new();
        for table in kind.tables() {
            let rows = Self::select(&items, table)?;
            let out_path = out_dir.join(table.file_name);
            write(&out_path, &rows)?;
            written.push(out_path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use tempfile::TempDir;

    const SCRIPT_H: &str = "\
enum {
    smRoman = 0,
    smJapanese = 1,
    smUninterp = 32,
    smAllScripts = -3
};

enum {
    verUS = 0,
    verFrance = 0x01,
    verGreenland = 73,
    verLastRegion = 120
};
";

    fn write_header(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_header_kind_case_insensitive() {
        assert_eq!(
            HeaderKind::from_path(Path::new("/x/Script.h")).unwrap(),
            HeaderKind::Script
        );
        assert_eq!(
            HeaderKind::from_path(Path::new("TEXTCOMMON.H")).unwrap(),
            HeaderKind::TextCommon
        );
    }

    #[test]
    fn test_header_kind_unknown() {
        let err = HeaderKind::from_path(Path::new("Fonts.h")).unwrap_err();
        assert!(matches!(err, Error::UnknownHeader { .. }));
    }

    #[test]
    fn test_process_script_header() {
        let tmp = TempDir::new().unwrap();
        let header = write_header(tmp.path(), "Script.h", SCRIPT_H);
        let out = tmp.path().join("out");
        fs::create_dir(&out).unwrap();

        let written = HeaderExtractor::process(&header, &out).unwrap();

        assert_eq!(written, vec![out.join("script.csv"), out.join("region.csv")]);
        assert_eq!(
            fs::read_to_string(out.join("script.csv")).unwrap(),
            "Name,Value\nsmRoman,0\nsmJapanese,1\nsmUninterp,32\n"
        );
        assert_eq!(
            fs::read_to_string(out.join("region.csv")).unwrap(),
            "Name,Value\nverUS,0\nverFrance,1\nverGreenland,73\n"
        );
    }

    #[test]
    fn test_process_text_common_keeps_all_members() {
        let tmp = TempDir::new().unwrap();
        let header = write_header(
            tmp.path(),
            "TextCommon.h",
            "kTextEncodingMacRoman = 0L,\nkTextEncodingUnicodeDefault = 0x0100,\nkTextScriptDontCare = -128\n",
        );

        HeaderExtractor::process(&header, tmp.path()).unwrap();

        assert_eq!(
            fs::read_to_string(tmp.path().join("encoding.csv")).unwrap(),
            "Name,Value\nkTextEncodingMacRoman,0\nkTextEncodingUnicodeDefault,256\n"
        );
    }

    #[test]
    fn test_missing_boundary_writes_no_csv_for_range() {
        let tmp = TempDir::new().unwrap();
        let header = write_header(
            tmp.path(),
            "script.h",
            "smRoman = 0\nsmJapanese = 1\nverUS = 0\nverGreenland = 73\n",
        );

        let err = HeaderExtractor::process(&header, tmp.path()).unwrap_err();

        assert_eq!(err.to_string(), r#"missing value: "smUninterp""#);
        assert!(!tmp.path().join("script.csv").exists());
    }

    #[test]
    fn test_missing_region_boundary_keeps_script_csv() {
        let tmp = TempDir::new().unwrap();
        let header = write_header(tmp.path(), "script.h", "smRoman = 0\nsmUninterp = 32\nverUS = 0\n");

        let err = HeaderExtractor::process(&header, tmp.path()).unwrap_err();

        assert!(matches!(err, Error::MissingIdentifier { ref name } if name == "verGreenland"));
        assert!(tmp.path().join("script.csv").exists());
        assert!(!tmp.path().join("region.csv").exists());
    }

    #[test]
    fn test_unknown_header_reads_nothing() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("Other.h");

        let err = HeaderExtractor::process(&missing, tmp.path()).unwrap_err();
        assert!(matches!(err, Error::UnknownHeader { .. }));
    }
}

//! Enum assignment scanning

use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::error::{Error, Result};

/// `NAME = 123` or `NAME = 0x7B` at the start of a line, optionally followed
/// by `u`/`l` suffixes. CR, LF and CRLF all end a line.
static ENUM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?imR-u)^\s*(\w+)\s*=\s*(0x[0-9a-f]+|[0-9]+)u?l?\b").unwrap()
});

/// A named enum constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumItem {
    /// Identifier
    pub name: String,
    /// Parsed value
    pub value: u64,
}

impl EnumItem {
    /// Create a new item
    #[must_use]
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// List enum assignments in file order.
///
/// # Errors
///
/// Returns an error if a literal does not fit in 64 bits.
pub fn list_enums(data: &[u8]) -> Result<Vec<EnumItem>> {
    ENUM_PATTERN
        .captures_iter(data)
        .map(|caps| {
            // Both groups only match ASCII
            let name = String::from_utf8_lossy(&caps[1]).into_owned();
            let literal = String::from_utf8_lossy(&caps[2]).into_owned();
            let value = parse_literal(&literal).ok_or_else(|| Error::InvalidLiteral {
                name: name.clone(),
                literal: literal.clone(),
            })?;
            Ok(EnumItem { name, value })
        })
        .collect()
}

/// Parse a decimal or `0x` hex literal
fn parse_literal(literal: &str) -> Option<u64> {
    match literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => literal.parse().ok(),
    }
}

/// Position of the first item named `key`
///
/// # Errors
///
/// Returns [`Error::MissingIdentifier`] if no item has that name.
pub fn index_of(items: &[EnumItem], key: &str) -> Result<usize> {
    items
        .iter()
        .position(|item| item.name == key)
        .ok_or_else(|| Error::MissingIdentifier {
            name: key.to_string(),
        })
}

/// Items from `first` through `last`, inclusive.
///
/// # Errors
///
/// Returns [`Error::MissingIdentifier`] naming whichever boundary is absent.
pub fn slice<'a>(items: &'a [EnumItem], first: &str, last: &str) -> Result<&'a [EnumItem]> {
    let start = index_of(items, first)?;
    let end = index_of(items, last)?;
    Ok(items.get(start..=end).unwrap_or(&[]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_enums_decimal_and_hex() {
        let data = b"enum {\n    smRoman = 0,\n    smJapanese\t= 1,\n    kMask = 0x7F,\n    kBig = 0X10UL\n};\n";
        let items = list_enums(data).unwrap();

        assert_eq!(
            items,
            vec![
                EnumItem::new("smRoman", 0),
                EnumItem::new("smJapanese", 1),
                EnumItem::new("kMask", 0x7f),
                EnumItem::new("kBig", 16),
            ]
        );
    }

    #[test]
    fn test_list_enums_ignores_non_assignments() {
        let data = b"#define FOO 1\nx == 3;\n  /* a = b */\nint y = z;\n";
        assert!(list_enums(data).unwrap().is_empty());
    }

    #[test]
    fn test_list_enums_leading_zero_is_decimal() {
        let items = list_enums(b"verNorway = 012,\n").unwrap();
        assert_eq!(items, vec![EnumItem::new("verNorway", 12)]);
    }

    #[test]
    fn test_list_enums_requires_line_start() {
        let items = list_enums(b"typedef x; a = 1\n  b = 2\n").unwrap();
        assert_eq!(items, vec![EnumItem::new("b", 2)]);
    }

    #[test]
    fn test_list_enums_crlf_and_mac_line_endings() {
        let items = list_enums(b"a = 1,\r\nb = 2,\rc = 3\n").unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_list_enums_overflow() {
        let err = list_enums(b"huge = 99999999999999999999999\n").unwrap_err();
        assert!(matches!(err, Error::InvalidLiteral { .. }));
    }

    #[test]
    fn test_slice_inclusive() {
        let items = vec![
            EnumItem::new("a", 0),
            EnumItem::new("b", 1),
            EnumItem::new("c", 2),
            EnumItem::new("d", 3),
        ];

        let sliced = slice(&items, "b", "c").unwrap();
        assert_eq!(sliced, &items[1..3]);
    }

    #[test]
    fn test_slice_missing_boundary() {
        let items = vec![EnumItem::new("smRoman", 0)];

        let err = slice(&items, "smRoman", "smUninterp").unwrap_err();
        assert_eq!(err.to_string(), r#"missing value: "smUninterp""#);
    }

    #[test]
    fn test_slice_reversed_boundaries_is_empty() {
        let items = vec![EnumItem::new("a", 0), EnumItem::new("b", 1)];
        assert!(slice(&items, "b", "a").unwrap().is_empty());
    }
}

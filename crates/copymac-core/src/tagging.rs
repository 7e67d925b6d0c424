//! `FinderInfo` blocks and the capability used to attach them
//!
//! Classic Mac OS identifies a file's format and owning application through
//! the type and creator codes in its `FinderInfo`. The guest reads these from
//! an extended attribute on the shared folder, so every pushed file gets one.

use std::path::Path;

use crate::config::OsType;
use crate::error::Result;

/// Size of a `FinderInfo` block in bytes
pub const FINDER_INFO_LEN: usize = 32;

/// Extended attribute holding the `FinderInfo` block
#[cfg(target_os = "macos")]
pub const FINDER_INFO_ATTRIBUTE: &str = "com.apple.FinderInfo";

/// Extended attribute holding the `FinderInfo` block. Outside macOS only the
/// `user.` namespace is writable by ordinary users.
#[cfg(not(target_os = "macos"))]
pub const FINDER_INFO_ATTRIBUTE: &str = "user.com.apple.FinderInfo";

const FLAGS_OFFSET: usize = 8;

/// 32-byte `FinderInfo`: type, creator, a flag byte of `0x01`, then zeros
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderInfo([u8; FINDER_INFO_LEN]);

impl FinderInfo {
    /// Build the block for a type/creator pair
    #[must_use]
    pub const fn new(file_type: OsType, creator: OsType) -> Self {
        let mut bytes = [0u8; FINDER_INFO_LEN];
        let mut i = 0;
        while i < 4 {
            bytes[i] = file_type[i];
            bytes[i + 4] = creator[i];
            i += 1;
        }
        bytes[FLAGS_OFFSET] = 0x01;
        Self(bytes)
    }

    /// Raw attribute value
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FINDER_INFO_LEN] {
        &self.0
    }

    /// Type code stored in the block
    #[must_use]
    pub fn file_type(&self) -> OsType {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    /// Creator code stored in the block
    #[must_use]
    pub fn creator(&self) -> OsType {
        [self.0[4], self.0[5], self.0[6], self.0[7]]
    }
}

/// Attaches a metadata tag to a file.
///
/// This is the only platform-specific operation the sync engine performs.
pub trait FileTagger {
    /// Attach `tag` to the file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the tag cannot be stored.
    fn set_file_tag(&self, path: &Path, tag: &[u8]) -> Result<()>;
}

/// Stores tags in an extended attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XattrTagger {
    attribute: &'static str,
}

impl Default for XattrTagger {
    fn default() -> Self {
        Self::new(FINDER_INFO_ATTRIBUTE)
    }
}

impl XattrTagger {
    /// Tagger writing to the named attribute
    #[must_use]
    pub const fn new(attribute: &'static str) -> Self {
        Self { attribute }
    }

    /// Attribute name this tagger writes
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        self.attribute
    }
}

impl FileTagger for XattrTagger {
    #[cfg(unix)]
    fn set_file_tag(&self, path: &Path, tag: &[u8]) -> Result<()> {
        xattr::set(path, self.attribute, tag).map_err(|source| crate::error::Error::Tag {
            path: path.to_path_buf(),
            source,
        })
    }

    #[cfg(not(unix))]
    fn set_file_tag(&self, path: &Path, _tag: &[u8]) -> Result<()> {
        Err(crate::error::Error::Tag {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "extended attributes are not supported on this platform",
            ),
        })
    }
}

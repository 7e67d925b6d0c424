//! Error types for copymac

use std::io;
use std::path::{Path, PathBuf};

use crate::convert::ConvertError;

/// Result type alias using the copymac [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the sync engine and the header extractor
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem operation failed
    #[error("{action} {}: {source}", path.display())]
    Io {
        /// What was being attempted
        action: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Directory listing failed
    #[error("Failed to list {}: {source}", path.display())]
    Walk {
        /// Directory being listed
        path: PathBuf,
        /// Underlying walk error
        #[source]
        source: walkdir::Error,
    },

    /// Content could not be converted for the destination
    #[error("Failed to convert {}: {source}", path.display())]
    Convert {
        /// Source file being converted
        path: PathBuf,
        /// Conversion failure
        #[source]
        source: ConvertError,
    },

    /// Extended attribute could not be attached
    #[error("Failed to set file tag on {}: {source}", path.display())]
    Tag {
        /// Destination file
        path: PathBuf,
        /// Underlying attribute error
        #[source]
        source: io::Error,
    },

    /// Header file name is not one the extractor knows about
    #[error("unknown header file: {}", path.display())]
    UnknownHeader {
        /// Path given on the command line
        path: PathBuf,
    },

    /// A required identifier was absent from the parsed enum data
    #[error("missing value: {name:?}")]
    MissingIdentifier {
        /// Identifier that was looked up
        name: String,
    },

    /// Enum value literal does not fit the value type
    #[error("invalid integer literal {literal:?} for {name}")]
    InvalidLiteral {
        /// Enum member name
        name: String,
        /// Literal text as found in the header
        literal: String,
    },

    /// Config file could not be parsed
    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Layout or rule table failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Home directory could not be determined for the guest root
    #[error("Failed to determine home directory")]
    NoHomeDir,
}

impl Error {
    /// Wrap an I/O error with the action and path it belongs to
    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Attach path context to `std::io::Result` values
pub(crate) trait IoContext<T> {
    fn io_context(self, action: &'static str, path: &Path) -> Result<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn io_context(self, action: &'static str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::io(action, path, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_includes_path() {
        let err = Error::io(
            "Failed to read",
            Path::new("/tmp/missing.c"),
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );

        let msg = err.to_string();
        assert!(msg.contains("Failed to read /tmp/missing.c"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_missing_identifier_names_key() {
        let err = Error::MissingIdentifier {
            name: "smUninterp".to_string(),
        };
        assert_eq!(err.to_string(), r#"missing value: "smUninterp""#);
    }
}

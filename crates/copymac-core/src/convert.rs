//! Content conversion between host and guest representations
//!
//! Text files are re-encoded and get their line endings rewritten. Binary
//! files are copied as-is.

use encoding_rs::{Encoding, MACINTOSH, UTF_8};

use crate::config::{ConverterKind, SyncDirection};

/// Conversion failure, independent of any file path
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Input bytes are not valid in the input encoding
    #[error("input is not valid {0} text")]
    Decode(&'static str),
    /// Text contains characters the output encoding cannot represent
    #[error("text contains characters not representable in {0}")]
    Encode(&'static str),
}

/// Text re-encoding parameters for one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    input: &'static Encoding,
    output: &'static Encoding,
    newline: &'static str,
}

impl TextCodec {
    /// Host to guest: UTF-8 in, Mac Roman out, CR line endings
    pub const PUSH: Self = Self {
        input: UTF_8,
        output: MACINTOSH,
        newline: "\r",
    };

    /// Guest to host: Mac Roman in, UTF-8 out, LF line endings
    pub const PULL: Self = Self {
        input: MACINTOSH,
        output: UTF_8,
        newline: "\n",
    };

    /// Codec used when syncing in `direction`
    #[must_use]
    pub const fn for_direction(direction: SyncDirection) -> Self {
        match direction {
            SyncDirection::Push => Self::PUSH,
            SyncDirection::Pull => Self::PULL,
        }
    }

    /// Decode, normalize line endings and re-encode `input`.
    ///
    /// The output ends with exactly one terminator unless the input is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be decoded or the text cannot be
    /// encoded in the output encoding.
    pub fn convert(&self, input: &[u8]) -> Result<Vec<u8>, ConvertError> {
        let text = self
            .input
            .decode_without_bom_handling_and_without_replacement(input)
            .ok_or(ConvertError::Decode(self.input.name()))?;

        let mut lines = split_lines(&text);
        lines.push("");
        let joined = lines.join(self.newline);

        let (encoded, _, unmappable) = self.output.encode(&joined);
        if unmappable {
            return Err(ConvertError::Encode(self.output.name()));
        }
        Ok(encoded.into_owned())
    }
}

/// Split text into lines on `\r\n`, `\r` and `\n`.
///
/// Terminators are not included, and a trailing terminator does not produce
/// an empty final line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Content converter selected by a file type rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    /// Re-encode text and rewrite line endings
    Text(TextCodec),
    /// Copy bytes verbatim
    Binary,
}

impl Converter {
    /// Build the converter for `kind` when syncing in `direction`
    #[must_use]
    pub const fn new(kind: ConverterKind, direction: SyncDirection) -> Self {
        match kind {
            ConverterKind::Text => Self::Text(TextCodec::for_direction(direction)),
            ConverterKind::Binary => Self::Binary,
        }
    }

    /// Short label used in progress output
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Binary => "Data",
        }
    }

    /// Convert source bytes into destination bytes
    ///
    /// # Errors
    ///
    /// Returns an error if text conversion fails.
    pub fn convert(&self, input: &[u8]) -> Result<Vec<u8>, ConvertError> {
        match self {
            Self::Text(codec) => codec.convert(input),
            Self::Binary => Ok(input.to_vec()),
        }
    }
}

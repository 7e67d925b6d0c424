//! `Name,Value` table output

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::parse::EnumItem;
use crate::error::{IoContext, Result};

/// Render items as CSV with a `Name,Value` header row
#[must_use]
pub fn render(items: &[EnumItem]) -> String {
    let mut output = String::from("Name,Value\n");
    for item in items {
        let _ = writeln!(output, "{},{}", item.name, item.value);
    }
    output
}

/// Write items to `path`, announcing the file on stderr first.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write(path: &Path, items: &[EnumItem]) -> Result<()> {
    eprintln!("Writing {}", path.display());
    tracing::debug!(path = %path.display(), rows = items.len(), "Writing CSV");
    fs::write(path, render(items)).io_context("Failed to write", path)
}

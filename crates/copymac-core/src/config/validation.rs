//! Layout validation

use std::collections::HashSet;
use std::path::Component;

use super::types::SyncLayout;
use crate::error::{Error, Result};

/// Layout validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a layout before any filesystem work starts
    ///
    /// # Errors
    ///
    /// Returns an error if a root is empty, a subdirectory escapes its root
    /// or is listed twice, or a rule suffix is malformed.
    pub fn validate(layout: &SyncLayout) -> Result<()> {
        if layout.local_root.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("local_root cannot be empty".into()));
        }
        if layout.guest_root.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("guest_root cannot be empty".into()));
        }
        if layout.subdirs.is_empty() {
            return Err(Error::InvalidConfig("subdirs cannot be empty".into()));
        }

        let mut seen = HashSet::new();
        for subdir in &layout.subdirs {
            if subdir.as_os_str().is_empty() {
                return Err(Error::InvalidConfig("subdir cannot be empty".into()));
            }
            let escapes = subdir.components().any(|c| {
                matches!(
                    c,
                    Component::RootDir | Component::Prefix(_) | Component::ParentDir
                )
            });
            if escapes {
                return Err(Error::InvalidConfig(format!(
                    "subdir {} must be relative and stay inside the root",
                    subdir.display()
                )));
            }
            if !seen.insert(subdir) {
                return Err(Error::InvalidConfig(format!(
                    "subdir {} is listed more than once",
                    subdir.display()
                )));
            }
        }

        for (suffix, _) in layout.rules.iter() {
            let valid = suffix.len() > 1
                && suffix.starts_with('.')
                && !suffix[1..].contains('.');
            if !valid {
                return Err(Error::InvalidConfig(format!(
                    "rule suffix {suffix:?} must be a dot followed by a name"
                )));
            }
        }

        Ok(())
    }
}

//! Sync layout, rule table and config file handling
//!
//! This module handles:
//! - The built-in layout (subdirectories and suffix rules)
//! - Config file discovery and TOML parsing
//! - Applying overrides and resolving roots
//! - Validation and error reporting

mod discovery;
mod types;
mod validation;

use std::fs;
use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_ENV_VAR, ConfigDiscovery};
pub use types::{
    ConfigFile, ConverterKind, FileTypeRule, GUEST_DIR_NAME, OsType, RuleTable,
    STANDARD_SUBDIRS, SyncDirection, SyncLayout, TEXT_CREATOR, TEXT_SUFFIXES, suffix_of,
};
pub use validation::ConfigValidator;

use crate::error::{Error, IoContext, Result};

/// Loads overrides and resolves them into a validated [`SyncLayout`]
pub struct ConfigManager;

impl ConfigManager {
    /// Load the config file, if one is found.
    ///
    /// Returns the default (empty) overrides when no file is discovered.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigFile> {
        let Some(path) = ConfigDiscovery::discover(explicit) else {
            return Ok(ConfigFile::default());
        };

        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(&path).io_context("Failed to read config file", &path)?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse { path, source })
    }

    /// Apply overrides on top of the standard layout.
    ///
    /// `default_local_root` is used when the config does not set one. The
    /// local root must exist and is canonicalized; the guest root defaults to
    /// `~/SyncFiles`. A leading `~` in either root expands to the home
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown, the local root
    /// cannot be resolved, or the layout fails validation.
    pub fn resolve_layout(config: ConfigFile, default_local_root: &Path) -> Result<SyncLayout> {
        let local_root = match config.local_root {
            Some(root) => expand_home(&root)?,
            None => default_local_root.to_path_buf(),
        };
        let local_root =
            dunce::canonicalize(&local_root).io_context("Failed to resolve local root", &local_root)?;

        let guest_root = match config.guest_root {
            Some(root) => expand_home(&root)?,
            None => default_guest_root()?,
        };

        let mut layout = SyncLayout::standard(local_root, guest_root);
        if let Some(subdirs) = config.subdirs {
            layout.subdirs = subdirs;
        }

        ConfigValidator::validate(&layout)?;
        Ok(layout)
    }
}

/// `~/SyncFiles` for the current user
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_guest_root() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(GUEST_DIR_NAME))
        .ok_or(Error::NoHomeDir)
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .ok_or(Error::NoHomeDir),
        Err(_) => Ok(path.to_path_buf()),
    }
}

//! Config file discovery

use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "COPYMAC_CONFIG";

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Find the config file to load, if any.
    ///
    /// An explicit path (from `COPYMAC_CONFIG`) wins and is returned even if
    /// it does not exist, so loading can report it. Otherwise the global XDG
    /// config is used when present.
    #[must_use]
    pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        Self::find_global_config()
    }

    /// Explicit config path from the environment
    #[must_use]
    pub fn from_env() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Find global config in XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let config_dir = dirs::config_dir()?;
        let global_config = config_dir.join("copymac").join("config.toml");

        if global_config.is_file() {
            Some(global_config)
        } else {
            None
        }
    }
}

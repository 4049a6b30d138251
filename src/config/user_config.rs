//! User-level configuration
//!
//! Read from `<config_dir>/pylint-exit-options/config.toml`
//! (~/.config/pylint-exit-options/config.toml on Linux).

use super::FileConfig;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Get the user config file path
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pylint-exit-options").join("config.toml"))
}

/// Load the user config, or defaults if it is missing or unreadable
pub fn load_user_config() -> FileConfig {
    let Some(path) = user_config_path().filter(|p| p.is_file()) else {
        return FileConfig::default();
    };

    let parsed = std::fs::read_to_string(&path)
        .map_err(anyhow::Error::from)
        .and_then(|content| toml::from_str::<FileConfig>(&content).map_err(anyhow::Error::from));

    match parsed {
        Ok(config) => {
            debug!("Loaded user config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Ignoring user config {}: {}", path.display(), e);
            FileConfig::default()
        }
    }
}

//! Configuration module for pylint-exit-options
//!
//! Settings are layered, highest priority first:
//! 1. Command-line flags and `PYLINT_EXIT_REPORT`
//! 2. Project file in the working directory (or an explicit `--config` path)
//! 3. User file (~/.config/pylint-exit-options/config.toml)
//! 4. Built-in defaults
//!
//! Layers 1 and 4 are applied by the CLI; this module merges 2 and 3.

mod project_config;
mod user_config;

pub use project_config::{init_project_config, load_config_file, load_project_config, PROJECT_CONFIG_FILES};
pub use user_config::{load_user_config, user_config_path};

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Settings that can be stored in a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default reportable categories, e.g. "F,E,W,U"
    #[serde(default)]
    pub exit_report: Option<String>,

    /// Report format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Disable ANSI colors
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Treat unknown selectors as an error
    #[serde(default)]
    pub strict: Option<bool>,

    /// Print the decoded bit pattern before the report
    #[serde(default)]
    pub show_workings: Option<bool>,
}

impl FileConfig {
    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: FileConfig) {
        if other.exit_report.is_some() {
            self.exit_report = other.exit_report;
        }
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.no_color.is_some() {
            self.no_color = other.no_color;
        }
        if other.strict.is_some() {
            self.strict = other.strict;
        }
        if other.show_workings.is_some() {
            self.show_workings = other.show_workings;
        }
    }
}

/// Load the merged file configuration.
///
/// With `explicit` set, that file replaces project discovery and any error
/// reading it is returned. Otherwise discovery in `cwd` is best-effort.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<FileConfig> {
    let mut config = load_user_config();

    let project = match explicit {
        Some(path) => load_config_file(path)?,
        None => load_project_config(cwd),
    };
    config.merge(project);

    Ok(config)
}

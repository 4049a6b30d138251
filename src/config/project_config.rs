//! Project-level configuration support
//!
//! Loads per-project configuration from `pylint-exit.toml`,
//! `.pylint-exitrc.json`, or the `[tool.pylint-exit-options]` table of
//! `pyproject.toml` in the working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # pylint-exit.toml
//! exit_report = "F,E,W,U"
//! format = "text"
//! no_color = false
//! strict = false
//! show_workings = false
//! ```

use super::FileConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Discovered file names, in search order
pub const PROJECT_CONFIG_FILES: &[&str] = &["pylint-exit.toml", ".pylint-exitrc.json", "pyproject.toml"];

const EXAMPLE_CONFIG: &str = r#"# pylint-exit-options configuration

# Categories that make the run fail.
# F = Fatal, E = Error, W = Warning, R = Refactor, C = Convention, U = Usage
exit_report = "F,E,W,U"

# Report format: "text" or "json"
# format = "text"

# Disable colored output
# no_color = false

# Fail on unknown selectors instead of ignoring them
# strict = false

# Print the decoded bit pattern before the report
# show_workings = false
"#;

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: PyProjectTools,
}

#[derive(Debug, Default, Deserialize)]
struct PyProjectTools {
    #[serde(rename = "pylint-exit-options", default)]
    pylint_exit_options: Option<FileConfig>,
}

/// Load project configuration from `dir`.
///
/// Returns the first config found in [`PROJECT_CONFIG_FILES`] order. Files
/// that fail to parse are skipped with a warning. A `pyproject.toml` without
/// a `[tool.pylint-exit-options]` table counts as no config.
pub fn load_project_config(dir: &Path) -> FileConfig {
    for name in PROJECT_CONFIG_FILES {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        match read_config(&path) {
            Ok(Some(config)) => {
                debug!("Loaded project config from {}", path.display());
                return config;
            }
            Ok(None) => {
                debug!("No pylint-exit-options section in {}", path.display());
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    FileConfig::default()
}

/// Load an explicitly named config file. Any failure is an error.
pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    read_config(path)?.with_context(|| {
        format!(
            "{} has no [tool.pylint-exit-options] table",
            path.display()
        )
    })
}

fn read_config(path: &Path) -> Result<Option<FileConfig>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_pyproject = path.file_name().and_then(|n| n.to_str()) == Some("pyproject.toml");
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");

    if is_pyproject {
        let project: PyProject = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML in {}", path.display()))?;
        Ok(project.tool.pylint_exit_options)
    } else if is_json {
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?;
        Ok(Some(config))
    } else {
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML in {}", path.display()))?;
        Ok(Some(config))
    }
}

/// Write an example `pylint-exit.toml` into `dir`
pub fn init_project_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(PROJECT_CONFIG_FILES[0]);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }
    std::fs::write(&path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

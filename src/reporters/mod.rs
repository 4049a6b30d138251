//! Output reporters for translation results
//!
//! Supports two output formats:
//! - `text` - Terminal report listing found and blocking categories
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::translate::Translation;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Rendering switches shared by all formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colors (text only)
    pub color: bool,
    /// Include the decoded bit pattern
    pub show_workings: bool,
}

/// Render a translation in the specified format
pub fn render(t: &Translation, format: OutputFormat, opts: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(t, opts),
        OutputFormat::Json => json::render(t, opts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategorySet;
    use crate::translate::translate;

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_render_dispatch() {
        let t = translate(2, CategorySet::DEFAULT_REPORTABLE);
        let opts = RenderOptions {
            color: false,
            show_workings: false,
        };
        assert!(render(&t, OutputFormat::Text, &opts)
            .unwrap()
            .contains("Exiting with issues..."));
        assert!(render(&t, OutputFormat::Json, &opts)
            .unwrap()
            .trim_start()
            .starts_with('{'));
    }
}

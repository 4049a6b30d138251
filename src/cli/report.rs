//! Default command - translate a pylint exit code and print the report

use super::Cli;
use anyhow::{Context, Result};
use pylint_exit_options::config::{self, FileConfig};
use pylint_exit_options::reporters::{self, OutputFormat, RenderOptions};
use pylint_exit_options::{CategorySet, StatusTranslator};
use std::io::Write;
use tracing::{debug, warn};

/// Effective settings after merging flags, env and config files
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Settings {
    pub reportable: CategorySet,
    pub format: OutputFormat,
    pub color: bool,
    pub show_workings: bool,
}

impl Settings {
    /// Load config files and merge them under the command-line flags
    pub(super) fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let file = config::load(cli.config.as_deref(), &cwd)?;
        Self::resolve(cli, file)
    }

    fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let strict = cli.strict || file.strict.unwrap_or(false);
        let selectors = cli.exit_report.as_deref().or(file.exit_report.as_deref());
        let reportable = resolve_reportable(selectors, strict)?;

        let format = match cli.format.as_deref().or(file.format.as_deref()) {
            Some(f) => f.parse()?,
            None => OutputFormat::default(),
        };

        let no_color = cli.no_color || file.no_color.unwrap_or(false);

        Ok(Self {
            reportable,
            format,
            color: !no_color && console::colors_enabled(),
            show_workings: cli.show_workings || file.show_workings.unwrap_or(false),
        })
    }
}

/// Turn a selector list into the reportable set.
///
/// `None` means the default set. Unknown selectors are dropped with a
/// warning, or rejected when `strict` is set.
pub(super) fn resolve_reportable(selectors: Option<&str>, strict: bool) -> Result<CategorySet> {
    let Some(selectors) = selectors else {
        return Ok(CategorySet::DEFAULT_REPORTABLE);
    };

    if strict {
        return selectors
            .parse::<CategorySet>()
            .with_context(|| format!("Invalid --exit-report value '{}'", selectors));
    }

    let (set, unknown) = CategorySet::parse_lenient(selectors);
    for item in &unknown {
        warn!("Ignoring unknown category selector '{}'", item);
    }
    Ok(set)
}

/// Run the translation and print the report
pub fn run(cli: &Cli, raw_status: i64) -> Result<i32> {
    let settings = Settings::load(cli)?;
    debug!(?settings, "resolved settings");

    let translation = StatusTranslator::new(settings.reportable).translate(raw_status);

    if !cli.quiet {
        let opts = RenderOptions {
            color: settings.color,
            show_workings: settings.show_workings,
        };
        let out = reporters::render(&translation, settings.format, &opts)?;
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", out)?;
        if settings.format == OutputFormat::Json {
            writeln!(stdout)?;
        }
        stdout.flush()?;
    }

    Ok(translation.exit_code())
}

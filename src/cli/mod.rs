//! CLI command definitions and handlers

mod categories;
mod init;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pylint-exit-options - exit code handler for pylint
///
/// Decodes pylint's bit-encoded exit status and exits non-zero only when a
/// category listed in --exit-report was signaled.
#[derive(Parser, Debug)]
#[command(name = "pylint-exit-options")]
#[command(
    version,
    subcommand_negates_reqs = true,
    about = "Exit code handler for pylint: fail CI only on the message categories you choose",
    long_about = "pylint exits with a bitmask of the message categories it emitted \
(1 fatal, 2 error, 4 warning, 8 refactor, 16 convention, 32 usage error). \
pylint-exit-options decodes that status, reports what was found, and exits with \
a new status containing only the categories listed in --exit-report.\n\n\
Exit status: 0 when nothing reportable was signaled, 1-63 for the blocking \
categories, 64 when the tool itself fails.",
    after_help = "\
Examples:
  pylint mymodule || pylint-exit-options $?             Fail on F, E, W and U (default)
  pylint mymodule || pylint-exit-options --exit-report=F,E $?
  pylint mymodule || pylint-exit-options -r R,C $?      Fail only on refactor/convention
  pylint-exit-options --format json 24                  JSON output for scripting
  pylint-exit-options categories                        Show the category table"
)]
pub struct Cli {
    /// Exit code returned by pylint
    #[arg(value_name = "PYLINT_EXIT_CODE", required = true, allow_negative_numbers = true)]
    pub exit_code: Option<i64>,

    /// Categories that make the run fail: F[Fatal], E[Error], W[Warning],
    /// R[Refactor], C[Convention], U[Usage]. Default: F,E,W,U
    #[arg(long, short = 'r', value_name = "F,E,W,R,C,U", env = "PYLINT_EXIT_REPORT", global = true)]
    pub exit_report: Option<String>,

    /// Fail on unrecognized selectors instead of ignoring them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format: text, json
    #[arg(long, short = 'f', value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Print nothing; only set the exit status
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Show the decoded bit pattern of the exit code
    #[arg(long)]
    pub show_workings: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use instead of pylint-exit.toml / pyproject.toml discovery
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example pylint-exit.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List categories, their flags, and which ones currently fail the run
    Categories,
}

/// Run the CLI with parsed arguments, returning the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Some(Commands::Init { force }) => init::run(*force),
        Some(Commands::Categories) => categories::run(&cli),
        None => match cli.exit_code {
            Some(raw) => report::run(&cli, raw),
            None => anyhow::bail!("PYLINT_EXIT_CODE is required"),
        },
    }
}

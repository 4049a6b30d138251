//! Init command - write an example config file

use anyhow::{Context, Result};
use console::style;
use pylint_exit_options::{config, exit_codes};

/// Run the init command
pub fn run(force: bool) -> Result<i32> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let path = config::init_project_config(&cwd, force)?;

    println!("{} Created {}", style("✓").green(), style(path.display()).cyan());
    println!("\nEdit exit_report to choose which categories fail the run.");
    println!("Command-line flags and PYLINT_EXIT_REPORT still take precedence.");

    Ok(exit_codes::SUCCESS)
}

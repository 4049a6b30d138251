//! Categories command - show the flag table and the effective reportable set

use super::report::Settings;
use super::Cli;
use anyhow::Result;
use console::style;
use pylint_exit_options::{exit_codes, Category, CategorySet};

/// Run the categories command
pub fn run(cli: &Cli) -> Result<i32> {
    let settings = Settings::load(cli)?;
    if !settings.color {
        console::set_colors_enabled(false);
    }

    println!("\n  {}", style("SEL  FLAG  CATEGORY     FAILS RUN  DEFAULT").dim());
    for cat in Category::ALL {
        let fails = if settings.reportable.contains(cat) {
            style(format!("{:<9}", "yes")).red()
        } else {
            style(format!("{:<9}", "no")).green()
        };
        let default = if CategorySet::DEFAULT_REPORTABLE.contains(cat) {
            "yes"
        } else {
            "no"
        };
        println!(
            "  {}  {:>4}  {:<11}  {}  {}",
            style(format!("{:<3}", cat.selector())).bold(),
            cat.flag(),
            cat.to_string(),
            fails,
            default
        );
    }
    println!(
        "\n  Effective --exit-report: {}\n",
        style(settings.reportable.to_selector_string()).cyan()
    );

    Ok(exit_codes::SUCCESS)
}

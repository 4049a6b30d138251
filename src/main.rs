//! pylint-exit-options - exit code handler for pylint
//!
//! Turns pylint's bit-encoded exit status into a status that only fails on
//! the categories you configure.

mod cli;

use clap::Parser;
use pylint_exit_options::exit_codes;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Help and version go to stdout and exit 0; real usage errors are tool errors
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_codes::TOOL_ERROR);
        }
    };

    // Initialize logging; stdout is reserved for the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli::run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_codes::TOOL_ERROR);
        }
    }
}

//! bin2header CLI entry point.

mod cli;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use cli::Cli;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "BIN2HEADER_LOG";

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "Invalid arguments");
            println!("{}", Cli::command().render_usage());
            return ExitCode::from(1);
        }
    };

    let symbol = cli.variable_name.to_string_lossy();
    if cli.variable_name.to_str().is_none() {
        tracing::warn!(
            symbol = %symbol,
            "Variable name is not valid UTF-8; invalid bytes replaced"
        );
    }
    match bin2header::emit(&cli.input_file, &cli.output_file, &symbol) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

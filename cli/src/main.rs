//! route-atlas: route planning over a fixed map of countries
//!
//! Loads the country and adjacency files once, then answers `info`,
//! `route` and `status` queries against the in-memory map.

mod cli;
mod commands;
mod config;
mod error;
mod load;
mod logging;
mod prompt;
mod state;
mod util;

use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, Commands, OutputFormat};
use config::AtlasConfig;
use error::{CliError, ExitCode as AtlasExitCode};

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let format = cli.format.unwrap_or_default();
    match run(&cli) {
        Ok(()) => ExitCode::from(AtlasExitCode::Success as u8),
        Err((e, resolved_format)) => {
            if resolved_format.unwrap_or(format) == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Load config and map, then dispatch. Errors carry the output format once
/// the config has resolved it.
fn run(cli: &Cli) -> Result<(), (CliError, Option<OutputFormat>)> {
    let config = AtlasConfig::load(cli.config.as_deref())
        .map_err(|e| (e, None))?
        .with_overrides(cli);
    let format = config.format;
    let fail = |e: CliError| (e, Some(format));

    let loaded = load::load_atlas(&config).map_err(fail)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match &cli.command {
        Commands::Info(args) => {
            commands::info::run(&loaded, args, format, &mut input, &mut output)
        }
        Commands::Route(args) => {
            commands::route::run(&loaded, args, format, &mut input, &mut output)
        }
        Commands::Status => commands::status::run(&loaded, format, &mut output),
    }
    .map_err(fail)
}

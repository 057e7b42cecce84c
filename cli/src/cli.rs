use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Plan routes across a fixed map of countries
#[derive(Parser, Debug)]
#[command(name = "route-atlas", version, about)]
pub struct Cli {
    /// Config file (defaults to ./route-atlas.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Countries file: one `name,continent,fuel_cost` line per country
    #[arg(long, global = true, env = "ROUTE_ATLAS_COUNTRIES")]
    pub countries: Option<PathBuf>,

    /// Adjacencies file: `name,neighbour,neighbour,...` per line
    #[arg(long, global = true, env = "ROUTE_ATLAS_ADJACENCIES")]
    pub adjacencies: Option<PathBuf>,

    /// Output format
    #[arg(long, short, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. `debug`, `route_atlas_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a country's continent, fuel cost and neighbours
    Info(InfoArgs),

    /// Find the fastest route between two countries
    Route(RouteArgs),

    /// Show statistics about the loaded map
    Status,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Country name (prompted for when omitted)
    pub country: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Source country (prompted for when omitted)
    pub source: Option<String>,

    /// Destination country (prompted for when omitted)
    pub destination: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_with_globals() {
        let cli = Cli::try_parse_from([
            "route-atlas",
            "route",
            "peru",
            "china",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Route(args) => {
                assert_eq!(args.source.as_deref(), Some("peru"));
                assert_eq!(args.destination.as_deref(), Some("china"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_info_country_optional() {
        let cli = Cli::try_parse_from(["route-atlas", "info"]).unwrap();
        assert!(matches!(cli.command, Commands::Info(InfoArgs { country: None })));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["route-atlas", "--format", "xml", "status"]).is_err());
    }
}

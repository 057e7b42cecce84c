//! Configuration for the route-atlas CLI
//!
//! Precedence: command-line flag > environment variable > config file > default.
//! The config file is `route-atlas.toml` in the working directory unless
//! `--config` names another one.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "route-atlas.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtlasConfig {
    /// Countries file
    pub countries: PathBuf,
    /// Adjacencies file
    pub adjacencies: PathBuf,
    /// Default output format
    pub format: OutputFormat,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        AtlasConfig {
            countries: PathBuf::from("data/countries.csv"),
            adjacencies: PathBuf::from("data/adjacencies.csv"),
            format: OutputFormat::Human,
        }
    }
}

impl AtlasConfig {
    /// Load from an explicit path, or from the default file if it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file just means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AtlasConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Apply command-line and environment overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.countries {
            self.countries = path.clone();
        }
        if let Some(path) = &cli.adjacencies {
            self.adjacencies = path.clone();
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AtlasConfig::default();
        assert_eq!(config.countries, PathBuf::from("data/countries.csv"));
        assert_eq!(config.format, OutputFormat::Human);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atlas.toml");
        fs::write(&path, "format = \"json\"\ncountries = \"maps/c.csv\"\n").unwrap();

        let config = AtlasConfig::load(Some(&path)).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.countries, PathBuf::from("maps/c.csv"));
        assert_eq!(config.adjacencies, PathBuf::from("data/adjacencies.csv"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atlas.toml");
        fs::write(&path, "colour = \"red\"\n").unwrap();
        assert!(matches!(AtlasConfig::load(Some(&path)), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(AtlasConfig::load(Some(&path)), Err(CliError::Read { .. })));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli::try_parse_from([
            "route-atlas",
            "--countries",
            "other.csv",
            "--format",
            "json",
            "status",
        ])
        .unwrap();
        let config = AtlasConfig::default().with_overrides(&cli);
        assert_eq!(config.countries, PathBuf::from("other.csv"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.adjacencies, PathBuf::from("data/adjacencies.csv"));
    }
}

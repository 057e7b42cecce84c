//! Error types and exit codes for the route-atlas CLI
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, config)
//! - 2: Usage error (reported by clap before any command runs)
//! - 3: Data error (malformed records, unknown country)

use std::path::PathBuf;

use route_atlas_core::AtlasError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Atlas(#[from] AtlasError),

    #[error("{path:?} line {line}: {reason}")]
    InvalidRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Atlas(_) | CliError::InvalidRecord { .. } => ExitCode::Data,

            CliError::Read { .. } | CliError::Io(_) | CliError::Toml(_) | CliError::Json(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Structured error envelope for `--format json`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    fn error_type(&self) -> &'static str {
        match self {
            CliError::Atlas(AtlasError::NotFound { .. }) => "not_found",
            CliError::InvalidRecord { .. } => "invalid_record",
            CliError::Read { .. } => "read_error",
            CliError::Io(_) => "io_error",
            CliError::Toml(_) => "toml_error",
            CliError::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_data_error() {
        let err = CliError::from(AtlasError::NotFound {
            id: "Atlantis".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_json()["error"]["type"], "not_found");
        assert_eq!(err.to_json()["error"]["code"], 3);
    }

    #[test]
    fn test_invalid_record_message() {
        let err = CliError::InvalidRecord {
            path: PathBuf::from("countries.csv"),
            line: 4,
            reason: "missing cost".to_string(),
        };
        assert_eq!(err.to_string(), "\"countries.csv\" line 4: missing cost");
        assert_eq!(i32::from(err.exit_code()), 3);
    }
}

//! Error type for route-atlas-core.
//!
//! Only registry lookups can fail. Everything else in the core is total:
//! "no answer" is an empty path or a zero cost, never an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtlasError {
    /// No entity is registered under this identifier. Recoverable; callers
    /// are expected to ask again.
    #[error("'{id}' is not a known location")]
    NotFound { id: String },
}

impl AtlasError {
    /// The identifier that failed to resolve.
    pub fn id(&self) -> &str {
        match self {
            AtlasError::NotFound { id } => id,
        }
    }
}

pub type Result<T> = std::result::Result<T, AtlasError>;

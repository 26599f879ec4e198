/// Structured error types for aerodesk-core.
///
/// Uses `thiserror` so the server crate can match on variants; the CLI
/// wraps these in `anyhow` for display.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for aerodesk-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Entity name not present in the catalog
    #[error("Unknown entity '{name}'")]
    UnknownEntity { name: String },

    /// Column name not present on the entity
    #[error("Unknown column '{column}' on {entity}")]
    UnknownColumn { entity: &'static str, column: String },

    /// The static catalog contradicts itself
    #[error("Invalid catalog entry for {entity}: {reason}")]
    InvalidCatalog { entity: &'static str, reason: String },

    /// I/O operation failed
    #[error("I/O error reading {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    /// Config file is not valid TOML for the expected shape
    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration value is unusable
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for aerodesk-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::UnknownColumn {
            entity: "flight",
            column: "wingspan".into(),
        };
        assert_eq!(err.to_string(), "Unknown column 'wingspan' on flight");

        let err = CoreError::config("AERODESK_BIND is not a socket address");
        assert!(err.to_string().starts_with("Configuration error"));
    }
}

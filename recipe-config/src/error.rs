//! Error types for the `recipe-config` crate.

use thiserror::Error;

/// Errors raised when the configuration record is checked or exported.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required variables were absent or empty.
    #[error("Missing configuration: {}", .vars.join(", "))]
    Missing {
        /// Names of the missing environment variables.
        vars: Vec<&'static str>,
    },

    /// The SDK document could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A convenience result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

//! Identity SDK errors.

use thiserror::Error;

/// Errors raised by the identity bootstrap and client.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The SDK was already configured in this process.
    #[error("Identity SDK already configured")]
    AlreadyConfigured,

    /// A setting needed by the requested operation was not provided.
    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),

    /// A hosted UI URL could not be built from the configured values.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<url::ParseError> for AuthError {
    fn from(err: url::ParseError) -> Self {
        AuthError::InvalidUrl(err.to_string())
    }
}

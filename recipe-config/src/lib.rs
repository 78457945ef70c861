//! Identity-provider and API configuration for the recipe app shell.
//!
//! The configuration record is assembled once from environment variables
//! and handed to the identity SDK bootstrap. Loading never fails: absent
//! variables stay absent and surface at first use. Call
//! [`AppConfig::validate`] to opt into failing fast instead.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use recipe_config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! for var in config.missing_vars() {
//!     tracing::warn!(var, "identity configuration variable not set");
//! }
//! let document = config.to_sdk_json()?;
//! ```

pub mod env;
pub mod error;
pub mod record;

pub use env::{EnvSource, ProcessEnv};
pub use error::{ConfigError, Result};
pub use record::{
    API_ENDPOINT_NAME, ApiConfig, ApiEndpoint, AppConfig, AuthConfig, CognitoConfig, LoginWith,
    OAUTH_SCOPES, OAuthConfig, ResponseType,
};

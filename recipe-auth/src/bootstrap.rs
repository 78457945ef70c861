//! One-time identity SDK configuration.

use std::sync::{Arc, OnceLock};

use recipe_config::AppConfig;

use crate::{AuthError, IdentityClient};

/// Guards the single configuration of the identity SDK.
///
/// The process-wide instance sits behind [`configure`]; separate instances
/// are only useful for tests.
#[derive(Debug, Default)]
pub struct Bootstrap {
    client: OnceLock<Arc<IdentityClient>>,
}

impl Bootstrap {
    pub const fn new() -> Self {
        Self { client: OnceLock::new() }
    }

    /// Configure the SDK and return the client.
    ///
    /// # Errors
    ///
    /// [`AuthError::AlreadyConfigured`] on every call after the first.
    pub fn configure(&self, config: AppConfig) -> Result<Arc<IdentityClient>, AuthError> {
        let client = Arc::new(IdentityClient::new(config));
        self.client.set(client.clone()).map_err(|_| AuthError::AlreadyConfigured)?;

        let missing = client.config().missing_vars();
        if missing.is_empty() {
            tracing::info!("identity SDK configured");
        } else {
            tracing::warn!(?missing, "identity SDK configured with missing settings");
        }
        Ok(client)
    }

    pub fn client(&self) -> Option<Arc<IdentityClient>> {
        self.client.get().cloned()
    }

    pub fn is_configured(&self) -> bool {
        self.client.get().is_some()
    }
}

static SDK: Bootstrap = Bootstrap::new();

/// Configure the process-wide identity SDK. Succeeds once per process.
pub fn configure(config: AppConfig) -> Result<Arc<IdentityClient>, AuthError> {
    SDK.configure(config)
}

/// The process-wide client, if [`configure`] has run.
pub fn configured_client() -> Option<Arc<IdentityClient>> {
    SDK.client()
}

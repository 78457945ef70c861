//! The signed-in user as reported by the identity provider.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An authenticated user.
///
/// Opaque apart from the username; any further attributes the provider
/// reports are kept as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Username, used as the display name.
    pub username: String,

    /// Provider-reported attributes (e.g. `email`).
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl Principal {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), attributes: HashMap::new() }
    }

    /// Attach a provider attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn display_name(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> Option<&str> {
        self.attributes.get("email").map(String::as_str)
    }
}

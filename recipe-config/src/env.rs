//! Environment variable names and the sources they are read from.

use std::collections::HashMap;

pub const USER_POOL_ID: &str = "VITE_USER_POOL_ID";
pub const USER_POOL_CLIENT_ID: &str = "VITE_USER_POOL_CLIENT_ID";
pub const COGNITO_DOMAIN: &str = "VITE_COGNITO_DOMAIN";
pub const REDIRECT_SIGN_IN: &str = "VITE_REDIRECT_SIGN_IN";
pub const REDIRECT_SIGN_OUT: &str = "VITE_REDIRECT_SIGN_OUT";
pub const API_ENDPOINT: &str = "VITE_API_ENDPOINT";
pub const AWS_REGION: &str = "VITE_AWS_REGION";

/// Every variable the configuration record is built from, in record order.
pub const ALL_VARS: [&str; 7] = [
    USER_POOL_ID,
    USER_POOL_CLIENT_ID,
    COGNITO_DOMAIN,
    REDIRECT_SIGN_IN,
    REDIRECT_SIGN_OUT,
    API_ENDPOINT,
    AWS_REGION,
];

/// A source of string-valued variables.
pub trait EnvSource {
    /// Look up a variable. `None` when it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

//! The configuration record and its SDK document shape.

use serde::{Deserialize, Serialize};

use crate::env::{self, EnvSource, ProcessEnv};
use crate::error::{ConfigError, Result};

/// OAuth scopes requested from the identity provider. Not environment-sourced.
pub const OAUTH_SCOPES: [&str; 3] = ["email", "openid", "profile"];

/// Name under which the recipe backend is registered with the SDK.
pub const API_ENDPOINT_NAME: &str = "RecipeAPI";

/// How the hosted UI returns tokens after sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Tokens are returned directly in the redirect fragment.
    #[default]
    Token,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Token => "token",
        }
    }
}

/// Configuration handed to the identity SDK at bootstrap.
///
/// Built once by [`AppConfig::from_env`] and read-only afterwards. Serializes
/// to the nested document the hosted SDK consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "Auth")]
    pub auth: AuthConfig,
    #[serde(rename = "API")]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(rename = "Cognito")]
    pub cognito: CognitoConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_client_id: Option<String>,
    pub login_with: LoginWith,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginWith {
    pub oauth: OAuthConfig,
}

/// Hosted UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub scopes: Vec<String>,
    #[serde(default)]
    pub redirect_sign_in: Vec<String>,
    #[serde(default)]
    pub redirect_sign_out: Vec<String>,
    pub response_type: ResponseType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoints: Vec<ApiEndpoint>,
}

/// A named backend the client may call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl AppConfig {
    /// Build the record from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(ProcessEnv)
    }

    /// Build the record from any variable source.
    ///
    /// Values are copied verbatim. Absent variables stay absent.
    pub fn from_source<S: EnvSource>(source: S) -> Self {
        let config = Self {
            auth: AuthConfig {
                cognito: CognitoConfig {
                    user_pool_id: source.var(env::USER_POOL_ID),
                    user_pool_client_id: source.var(env::USER_POOL_CLIENT_ID),
                    login_with: LoginWith {
                        oauth: OAuthConfig {
                            domain: source.var(env::COGNITO_DOMAIN),
                            scopes: OAUTH_SCOPES.iter().map(|s| s.to_string()).collect(),
                            redirect_sign_in: source.var(env::REDIRECT_SIGN_IN).into_iter().collect(),
                            redirect_sign_out: source
                                .var(env::REDIRECT_SIGN_OUT)
                                .into_iter()
                                .collect(),
                            response_type: ResponseType::Token,
                        },
                    },
                },
            },
            api: ApiConfig {
                endpoints: vec![ApiEndpoint {
                    name: API_ENDPOINT_NAME.to_string(),
                    endpoint: source.var(env::API_ENDPOINT),
                    region: source.var(env::AWS_REGION),
                }],
            },
        };

        tracing::debug!(missing = ?config.missing_vars(), "loaded identity configuration");
        config
    }

    pub fn user_pool_id(&self) -> Option<&str> {
        self.auth.cognito.user_pool_id.as_deref()
    }

    pub fn user_pool_client_id(&self) -> Option<&str> {
        self.auth.cognito.user_pool_client_id.as_deref()
    }

    pub fn oauth(&self) -> &OAuthConfig {
        &self.auth.cognito.login_with.oauth
    }

    pub fn oauth_domain(&self) -> Option<&str> {
        self.oauth().domain.as_deref()
    }

    pub fn redirect_sign_in(&self) -> Option<&str> {
        self.oauth().redirect_sign_in.first().map(String::as_str)
    }

    pub fn redirect_sign_out(&self) -> Option<&str> {
        self.oauth().redirect_sign_out.first().map(String::as_str)
    }

    /// Find a registered API endpoint by name.
    pub fn api_endpoint(&self, name: &str) -> Option<&ApiEndpoint> {
        self.api.endpoints.iter().find(|e| e.name == name)
    }

    /// Names of environment variables that were absent or empty.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let recipe_api = self.api_endpoint(API_ENDPOINT_NAME);
        let values = [
            self.user_pool_id(),
            self.user_pool_client_id(),
            self.oauth_domain(),
            self.redirect_sign_in(),
            self.redirect_sign_out(),
            recipe_api.and_then(|e| e.endpoint.as_deref()),
            recipe_api.and_then(|e| e.region.as_deref()),
        ];

        env::ALL_VARS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_none_or(str::is_empty))
            .map(|(var, _)| *var)
            .collect()
    }

    /// Fail fast when any variable is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every absent or empty variable.
    pub fn validate(&self) -> Result<()> {
        let vars = self.missing_vars();
        if vars.is_empty() { Ok(()) } else { Err(ConfigError::Missing { vars }) }
    }

    /// The SDK configuration document as JSON.
    pub fn to_sdk_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (env::USER_POOL_ID, "us-east-1_ABC123"),
            (env::USER_POOL_CLIENT_ID, "client-xyz"),
            (env::COGNITO_DOMAIN, "recipes.auth.us-east-1.amazoncognito.com"),
            (env::REDIRECT_SIGN_IN, "http://localhost:5173/"),
            (env::REDIRECT_SIGN_OUT, "http://localhost:5173/signed-out"),
            (env::API_ENDPOINT, "https://api.example.com/prod"),
            (env::AWS_REGION, "us-east-1"),
        ])
    }

    #[test]
    fn test_values_copied_verbatim() {
        let config = AppConfig::from_source(full_env());
        assert_eq!(config.user_pool_id(), Some("us-east-1_ABC123"));
        assert_eq!(config.user_pool_client_id(), Some("client-xyz"));
        assert_eq!(config.oauth_domain(), Some("recipes.auth.us-east-1.amazoncognito.com"));
        assert_eq!(config.redirect_sign_in(), Some("http://localhost:5173/"));
        assert_eq!(config.redirect_sign_out(), Some("http://localhost:5173/signed-out"));

        let api = config.api_endpoint(API_ENDPOINT_NAME).unwrap();
        assert_eq!(api.endpoint.as_deref(), Some("https://api.example.com/prod"));
        assert_eq!(api.region.as_deref(), Some("us-east-1"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fixed_values_ignore_environment() {
        let config = AppConfig::from_source(HashMap::<&str, &str>::new());
        assert_eq!(config.oauth().scopes, vec!["email", "openid", "profile"]);
        assert_eq!(config.oauth().response_type.as_str(), "token");
        assert_eq!(config.api.endpoints.len(), 1);
        assert_eq!(config.api.endpoints[0].name, "RecipeAPI");
    }

    #[test]
    fn test_missing_values_stay_absent() {
        let mut vars = full_env();
        vars.remove(env::COGNITO_DOMAIN);
        vars.insert(env::AWS_REGION, "");

        let config = AppConfig::from_source(vars);
        assert_eq!(config.oauth_domain(), None);
        assert_eq!(config.missing_vars(), vec![env::COGNITO_DOMAIN, env::AWS_REGION]);

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing configuration: VITE_COGNITO_DOMAIN, VITE_AWS_REGION"
        );
    }

    #[test]
    fn test_sdk_document_shape() {
        let config = AppConfig::from_source(full_env());
        let doc: serde_json::Value = serde_json::from_str(&config.to_sdk_json().unwrap()).unwrap();

        let cognito = &doc["Auth"]["Cognito"];
        assert_eq!(cognito["userPoolId"], "us-east-1_ABC123");
        assert_eq!(cognito["userPoolClientId"], "client-xyz");
        let oauth = &cognito["loginWith"]["oauth"];
        assert_eq!(oauth["responseType"], "token");
        assert_eq!(oauth["redirectSignIn"], serde_json::json!(["http://localhost:5173/"]));
        assert_eq!(doc["API"]["endpoints"][0]["name"], "RecipeAPI");
        assert_eq!(doc["API"]["endpoints"][0]["region"], "us-east-1");
    }

    #[test]
    fn test_sdk_document_omits_absent_values() {
        let config = AppConfig::from_source(HashMap::<&str, &str>::new());
        let doc: serde_json::Value = serde_json::from_str(&config.to_sdk_json().unwrap()).unwrap();

        assert!(doc["Auth"]["Cognito"].get("userPoolId").is_none());
        assert_eq!(doc["Auth"]["Cognito"]["loginWith"]["oauth"]["redirectSignIn"], serde_json::json!([]));

        let parsed: AppConfig = serde_json::from_value(doc).unwrap();
        assert_eq!(parsed, config);
    }
}

//! Configured identity SDK client.

use recipe_config::{AppConfig, env};
use url::Url;

use crate::AuthError;

/// The identity SDK after bootstrap.
///
/// Holds the configuration record and derives the hosted UI endpoints from
/// it. Settings are checked when an endpoint is requested, not when the
/// client is built.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    config: AppConfig,
}

impl IdentityClient {
    pub(crate) fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Hosted UI sign-in URL.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingSetting`] when the domain, client ID or sign-in
    /// redirect is absent.
    pub fn authorize_url(&self) -> Result<String, AuthError> {
        self.hosted_ui_url("/oauth2/authorize")
    }

    /// Hosted UI self-registration URL.
    pub fn sign_up_url(&self) -> Result<String, AuthError> {
        self.hosted_ui_url("/signup")
    }

    /// Hosted UI logout URL, redirecting to the sign-out address afterwards.
    pub fn logout_url(&self) -> Result<String, AuthError> {
        let mut url = self.base_url()?;
        url.set_path("/logout");
        url.query_pairs_mut()
            .append_pair("client_id", self.client_id()?)
            .append_pair(
                "logout_uri",
                require(self.config.redirect_sign_out(), env::REDIRECT_SIGN_OUT)?,
            );
        Ok(url.to_string())
    }

    fn hosted_ui_url(&self, path: &str) -> Result<String, AuthError> {
        let oauth = self.config.oauth();
        let mut url = self.base_url()?;
        url.set_path(path);
        url.query_pairs_mut()
            .append_pair("client_id", self.client_id()?)
            .append_pair("response_type", oauth.response_type.as_str())
            .append_pair("scope", &oauth.scopes.join(" "))
            .append_pair(
                "redirect_uri",
                require(self.config.redirect_sign_in(), env::REDIRECT_SIGN_IN)?,
            );

        tracing::debug!(path, "built hosted UI url");
        Ok(url.to_string())
    }

    fn client_id(&self) -> Result<&str, AuthError> {
        require(self.config.user_pool_client_id(), env::USER_POOL_CLIENT_ID)
    }

    fn base_url(&self) -> Result<Url, AuthError> {
        let domain = require(self.config.oauth_domain(), env::COGNITO_DOMAIN)?;
        let url = if domain.starts_with("https://") || domain.starts_with("http://") {
            Url::parse(domain)?
        } else {
            Url::parse(&format!("https://{domain}"))?
        };
        Ok(url)
    }
}

fn require<'a>(value: Option<&'a str>, var: &'static str) -> Result<&'a str, AuthError> {
    value.filter(|v| !v.is_empty()).ok_or(AuthError::MissingSetting(var))
}

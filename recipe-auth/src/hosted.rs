//! Boundary backed by the identity provider's hosted UI.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::{AuthBoundary, IdentityClient, LoginPrompt, Principal, Session, SignOut, Visitor};

type SessionTable = Arc<RwLock<HashMap<String, Principal>>>;

/// Hosted UI authentication boundary.
///
/// Unauthenticated visitors are pointed at the hosted sign-in page. Each
/// principal reported back by the provider is held in memory under its own
/// session ID; a visitor resolves only the session it presents, and signing
/// out drops only that session. Self-registration is hidden unless
/// [`HostedUiBoundary::show_sign_up`] is set.
#[derive(Debug, Clone)]
pub struct HostedUiBoundary {
    client: Arc<IdentityClient>,
    hide_sign_up: bool,
    sessions: SessionTable,
}

impl HostedUiBoundary {
    pub fn new(client: Arc<IdentityClient>) -> Self {
        Self { client, hide_sign_up: true, sessions: Arc::new(RwLock::new(HashMap::new())) }
    }

    pub fn show_sign_up(mut self, show: bool) -> Self {
        self.hide_sign_up = !show;
        self
    }

    pub fn client(&self) -> &IdentityClient {
        &self.client
    }

    /// Record a principal the provider signed in and return its new session ID.
    pub fn establish(&self, principal: Principal) -> String {
        let session_id = uuid::Uuid::new_v4().to_string();
        tracing::info!(username = %principal.username, "session established");
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id.clone(), principal);
        session_id
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn sign_out_action(&self, session_id: String) -> SignOut {
        let sessions = self.sessions.clone();
        SignOut::new(move || {
            let previous =
                sessions.write().unwrap_or_else(PoisonError::into_inner).remove(&session_id);
            if let Some(principal) = previous {
                tracing::info!(username = %principal.username, "signed out");
            }
        })
    }
}

#[async_trait]
impl AuthBoundary for HostedUiBoundary {
    async fn resolve(&self, visitor: &Visitor) -> Session {
        let Some(session_id) = visitor.session_id() else {
            return Session::Unauthenticated;
        };
        let principal =
            self.sessions.read().unwrap_or_else(PoisonError::into_inner).get(session_id).cloned();
        match principal {
            Some(principal) => Session::Authenticated {
                principal: Some(principal),
                sign_out: self.sign_out_action(session_id.to_string()),
            },
            None => Session::Unauthenticated,
        }
    }

    fn login_prompt(&self) -> LoginPrompt {
        let sign_in_url = self
            .client
            .authorize_url()
            .inspect_err(|e| tracing::warn!(error = %e, "hosted sign-in unavailable"))
            .ok();
        let sign_up_url =
            if self.hide_sign_up { None } else { self.client.sign_up_url().ok() };

        LoginPrompt { sign_in_url, sign_up_url }
    }
}

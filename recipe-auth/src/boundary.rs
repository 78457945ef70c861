//! The authentication boundary seam.

use async_trait::async_trait;

use crate::{Principal, Session, SignOut, Visitor};

/// Owns login presentation and session resolution.
///
/// The root composition renders through this trait. Implementations keep
/// whatever state machine the identity provider runs to themselves and only
/// report its outcome.
#[async_trait]
pub trait AuthBoundary: Send + Sync {
    /// Resolve the session `visitor` presents.
    async fn resolve(&self, visitor: &Visitor) -> Session;

    /// What to show while nobody is signed in.
    fn login_prompt(&self) -> LoginPrompt;
}

/// Login presentation for an unauthenticated visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginPrompt {
    /// Where to send the visitor to sign in.
    pub sign_in_url: Option<String>,
    /// Self-registration link. `None` when sign-up is hidden.
    pub sign_up_url: Option<String>,
}

/// A boundary that reports the same session to every visitor.
#[derive(Debug, Clone)]
pub struct StaticBoundary {
    session: Session,
    prompt: LoginPrompt,
}

impl StaticBoundary {
    pub fn new(session: Session) -> Self {
        Self { session, prompt: LoginPrompt::default() }
    }

    pub fn unauthenticated() -> Self {
        Self::new(Session::Unauthenticated)
    }

    pub fn authenticated(principal: Option<Principal>, sign_out: SignOut) -> Self {
        Self::new(Session::Authenticated { principal, sign_out })
    }

    pub fn with_prompt(mut self, prompt: LoginPrompt) -> Self {
        self.prompt = prompt;
        self
    }
}

#[async_trait]
impl AuthBoundary for StaticBoundary {
    async fn resolve(&self, _visitor: &Visitor) -> Session {
        self.session.clone()
    }

    fn login_prompt(&self) -> LoginPrompt {
        self.prompt.clone()
    }
}

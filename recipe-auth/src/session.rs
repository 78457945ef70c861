//! Session state surfaced by an authentication boundary.

use std::fmt;
use std::sync::Arc;

use crate::Principal;

/// Terminates the current session.
///
/// Cheap to clone; every clone invokes the same action.
#[derive(Clone)]
pub struct SignOut(Arc<dyn Fn() + Send + Sync>);

impl SignOut {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    /// A sign-out action that does nothing.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for SignOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SignOut(..)")
    }
}

/// Result of resolving the current session.
#[derive(Debug, Clone)]
pub enum Session {
    /// Nobody is signed in; the boundary shows its login prompt.
    Unauthenticated,
    /// A session exists. The principal may not have resolved yet.
    Authenticated { principal: Option<Principal>, sign_out: SignOut },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Session::Authenticated { principal, .. } => principal.as_ref(),
            Session::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_sign_out_clones_share_action() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let sign_out = SignOut::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let copy = sign_out.clone();
        sign_out.invoke();
        copy.invoke();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_session_principal() {
        let session = Session::Authenticated {
            principal: Some(Principal::new("alice")),
            sign_out: SignOut::noop(),
        };
        assert!(session.is_authenticated());
        assert_eq!(session.principal().map(Principal::display_name), Some("alice"));
        assert!(Session::Unauthenticated.principal().is_none());
    }
}

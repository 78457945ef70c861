//! The party a session is resolved for.

/// Identifies who is asking for a session.
///
/// Carries the session ID the visitor presented, if any. Boundaries that
/// track sessions per visitor look it up; others ignore it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visitor {
    session_id: Option<String>,
}

impl Visitor {
    /// A visitor who presented no session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_session(session_id: impl Into<String>) -> Self {
        Self { session_id: Some(session_id.into()) }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|id| !id.is_empty())
    }
}

//! Client-side routing provider.

use serde::Serialize;

use crate::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouterKind {
    /// History-API routing on clean URLs.
    #[default]
    Browser,
}

impl RouterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouterKind::Browser => "browser",
        }
    }
}

/// Provides routing context to its children.
///
/// The shell declares no routes; it only establishes the provider so pages
/// can be mounted beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterProvider {
    pub kind: RouterKind,
    pub children: Vec<Component>,
}

impl RouterProvider {
    pub fn browser(children: Vec<Component>) -> Self {
        Self { kind: RouterKind::Browser, children }
    }
}

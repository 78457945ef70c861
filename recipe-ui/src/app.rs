//! The root component.

use std::sync::Arc;

use recipe_auth::{AuthBoundary, LoginPrompt, Principal, Session, Visitor};

use crate::{Component, RouterProvider, View};

/// Control ID of the sign-out button.
pub const SIGN_OUT_CONTROL: &str = "sign-out";

/// The shell's root composition.
///
/// Holds no state of its own. Each [`App::render`] asks the boundary for the
/// visitor's session once and builds the tree from the answer.
#[derive(Clone)]
pub struct App {
    boundary: Arc<dyn AuthBoundary>,
}

impl App {
    pub fn new(boundary: Arc<dyn AuthBoundary>) -> Self {
        Self { boundary }
    }

    pub async fn render(&self, visitor: &Visitor) -> View {
        match self.boundary.resolve(visitor).await {
            Session::Authenticated { principal, sign_out } => {
                View::new(signed_in(principal.as_ref())).bind(SIGN_OUT_CONTROL, sign_out)
            }
            Session::Unauthenticated => View::new(login(&self.boundary.login_prompt())),
        }
    }
}

/// Heading text for a principal. An unresolved principal yields `"Welcome "`.
pub fn welcome_heading(principal: Option<&Principal>) -> String {
    format!("Welcome {}", principal.map(Principal::display_name).unwrap_or_default())
}

fn signed_in(principal: Option<&Principal>) -> Component {
    Component::Router(RouterProvider::browser(vec![Component::container(vec![
        Component::heading(1, welcome_heading(principal)),
        Component::button(SIGN_OUT_CONTROL, "Sign out"),
    ])]))
}

fn login(prompt: &LoginPrompt) -> Component {
    let mut children = vec![Component::heading(1, "Sign in")];
    match &prompt.sign_in_url {
        Some(url) => children.push(Component::link(url.clone(), "Sign in")),
        None => children.push(Component::text("Sign-in is not available.")),
    }
    if let Some(url) = &prompt.sign_up_url {
        children.push(Component::link(url.clone(), "Create account"));
    }
    Component::container(children)
}

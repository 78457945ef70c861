//! Rendered views and control activation.

use std::collections::HashMap;

use recipe_auth::SignOut;

use crate::html::{self, HtmlOptions};
use crate::{Component, UiError};

/// A rendered component tree and the actions bound to its controls.
#[derive(Debug, Clone)]
pub struct View {
    root: Component,
    actions: HashMap<String, SignOut>,
}

impl View {
    pub(crate) fn new(root: Component) -> Self {
        Self { root, actions: HashMap::new() }
    }

    pub(crate) fn bind(mut self, control: impl Into<String>, action: SignOut) -> Self {
        self.actions.insert(control.into(), action);
        self
    }

    pub fn root(&self) -> &Component {
        &self.root
    }

    /// Text of the first heading in the tree.
    pub fn heading_text(&self) -> Option<&str> {
        match self.root.find(&|c: &Component| matches!(c, Component::Heading(_))) {
            Some(Component::Heading(h)) => Some(h.text.as_str()),
            _ => None,
        }
    }

    pub fn has_control(&self, control: &str) -> bool {
        self.actions.contains_key(control)
    }

    /// Activate a control, running its bound action once.
    ///
    /// # Errors
    ///
    /// [`UiError::UnknownControl`] when the view has no such control.
    pub fn activate(&self, control: &str) -> Result<(), UiError> {
        let action = self
            .actions
            .get(control)
            .ok_or_else(|| UiError::UnknownControl(control.to_string()))?;

        tracing::debug!(control, "control activated");
        action.invoke();
        Ok(())
    }

    pub fn to_html(&self) -> String {
        self.to_html_with(&HtmlOptions::default())
    }

    pub fn to_html_with(&self, options: &HtmlOptions) -> String {
        html::render(&self.root, options)
    }
}

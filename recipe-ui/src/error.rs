//! Errors raised by rendered views.

use thiserror::Error;

/// Errors raised while interacting with a rendered view.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    /// No control with this ID exists in the view.
    #[error("Unknown control: {0}")]
    UnknownControl(String),
}

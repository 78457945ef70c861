//! Root composition of the recipe app shell.
//!
//! [`App`] nests the authentication boundary around a router provider around
//! the welcome markup. Rendering produces a [`View`]: a component tree plus
//! the actions its controls trigger.
//!
//! ```rust,ignore
//! use recipe_auth::Visitor;
//! use recipe_ui::{App, SIGN_OUT_CONTROL};
//!
//! let view = App::new(boundary).render(&Visitor::anonymous()).await;
//! println!("{}", view.heading_text().unwrap_or_default());
//! view.activate(SIGN_OUT_CONTROL)?;
//! ```

mod app;
mod component;
mod error;
pub mod html;
mod router;
mod view;

pub use app::{App, SIGN_OUT_CONTROL, welcome_heading};
pub use component::{Button, Component, Container, Heading, Link, Text};
pub use error::UiError;
pub use html::HtmlOptions;
pub use router::{RouterKind, RouterProvider};
pub use view::View;

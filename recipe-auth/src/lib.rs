//! Identity SDK bootstrap and authentication boundary.
//!
//! [`configure`] runs once at startup and returns the configured
//! [`IdentityClient`]. Anything that needs the identity provider receives
//! that client explicitly. The [`AuthBoundary`] trait is the seam the root
//! composition renders through: it resolves the [`Session`] a [`Visitor`]
//! presents and supplies the login prompt shown while nobody is signed in.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use recipe_auth::{HostedUiBoundary, configure};
//! use recipe_config::AppConfig;
//!
//! let client = configure(AppConfig::from_env())?;
//! let boundary = HostedUiBoundary::new(client);
//! ```

mod boundary;
mod bootstrap;
mod client;
mod error;
mod hosted;
mod principal;
mod session;
mod visitor;

pub use boundary::{AuthBoundary, LoginPrompt, StaticBoundary};
pub use bootstrap::{Bootstrap, configure, configured_client};
pub use client::IdentityClient;
pub use error::AuthError;
pub use hosted::HostedUiBoundary;
pub use principal::Principal;
pub use session::{Session, SignOut};
pub use visitor::Visitor;

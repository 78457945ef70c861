//! `recipe-server` serves the recipe app shell page alongside the Recipe API.

pub mod config;
pub mod logging;
pub mod server;
pub mod shell;

pub use config::ServerConfig;
pub use server::{AppState, app_router, run_server};

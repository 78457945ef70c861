use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use recipe_api::{ApiState, RecipeStore, api_router};
use recipe_auth::{AuthBoundary, IdentityClient};
use recipe_ui::App;
use tower_cookies::CookieManagerLayer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::ServerConfig,
    shell::{ShellState, shell_router},
};

#[derive(Clone)]
pub struct AppState {
    pub shell: ShellState,
    pub api: ApiState,
}

impl AppState {
    /// Assemble server state. `client` comes from the identity bootstrap, so
    /// nothing can render before the SDK is configured.
    pub fn new(
        client: Arc<IdentityClient>,
        boundary: Arc<dyn AuthBoundary>,
        store: Arc<dyn RecipeStore>,
    ) -> Self {
        Self {
            shell: ShellState { app: App::new(boundary), client },
            api: ApiState::new(store),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_router(state.api)
        .merge(shell_router(state.shell))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run_server(config: ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = app_router(state);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| "invalid host/port for recipe-server")?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("recipe-server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

use std::sync::Arc;

use recipe_api::InMemoryRecipeStore;
use recipe_auth::HostedUiBoundary;
use recipe_config::AppConfig;
use recipe_server::{AppState, ServerConfig, logging, run_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(logging::json_subscriber(std::io::stdout))?;

    // Configure the identity SDK before anything renders.
    let client = recipe_auth::configure(AppConfig::from_env())?;
    let boundary = Arc::new(HostedUiBoundary::new(client.clone()));
    let state = AppState::new(client, boundary, Arc::new(InMemoryRecipeStore::new()));

    run_server(ServerConfig::from_env(), state).await
}

//! HTTP routes over a [`RecipeStore`].

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::{
    error::ApiError,
    model::{ListQuery, ListResponse, Recipe},
    store::RecipeStore,
};

#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn RecipeStore>,
}

impl ApiState {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }
}

/// Build the recipe API router. Unmatched paths get a JSON 404.
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route("/recipes/{id}", get(get_recipe).put(update_recipe).delete(delete_recipe))
        .fallback(not_found)
        .with_state(state)
}

/// Fallback for paths no route matches.
pub async fn not_found(uri: axum::http::Uri) -> impl IntoResponse {
    warn!(path = %uri.path(), "route not found");
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not Found"})))
}

async fn hello() -> impl IntoResponse {
    info!("handling hello request");
    Json(json!({"message": "Hello from Recipe API!"}))
}

async fn list_recipes(
    State(state): State<ApiState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>, ApiError> {
    info!(start_key = ?query.start_key(), "handling list recipes request");
    let page = state.store.list(query.start_key()).await?;
    info!(count = page.items.len(), "listed recipes");
    Ok(Json(page.into()))
}

async fn get_recipe(
    Path(id): Path<String>,
    State(state): State<ApiState>,
) -> Result<Json<Recipe>, ApiError> {
    info!(recipe_id = %id, "handling get recipe request");
    let recipe = state.store.get(&id).await?.ok_or(ApiError::NotFound)?;
    info!(recipe_id = %id, "retrieved recipe");
    Ok(Json(recipe))
}

async fn create_recipe(
    State(state): State<ApiState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    info!("handling create recipe request");
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let recipe = state.store.create(Recipe::from_value(body)?).await?;
    info!(recipe_id = ?recipe.id(), "created recipe");
    Ok((StatusCode::CREATED, Json(recipe)))
}

async fn update_recipe(
    Path(id): Path<String>,
    State(state): State<ApiState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    info!(recipe_id = %id, "handling update recipe request");
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let fields = Recipe::from_value(body)?.into_fields();
    let recipe = state.store.update(&id, fields).await?.ok_or(ApiError::NotFound)?;
    info!(recipe_id = %id, "updated recipe");
    Ok(Json(recipe))
}

async fn delete_recipe(
    Path(id): Path<String>,
    State(state): State<ApiState>,
) -> Result<StatusCode, ApiError> {
    info!(recipe_id = %id, "handling delete recipe request");
    let existed = state.store.delete(&id).await?;
    info!(recipe_id = %id, existed, "deleted recipe");
    Ok(StatusCode::NO_CONTENT)
}

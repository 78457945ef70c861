//! Routes serving the rendered app shell.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use recipe_auth::{IdentityClient, Visitor};
use recipe_config::AppConfig;
use recipe_ui::{App, HtmlOptions, SIGN_OUT_CONTROL, UiError};
use serde_json::json;
use tower_cookies::{Cookie, Cookies};
use tracing::{info, warn};

/// Path prefix rendered buttons post to.
pub const CONTROLS_PATH: &str = "/controls";

/// Cookie carrying the visitor's session ID.
pub const SESSION_COOKIE: &str = "recipe_session";

#[derive(Clone)]
pub struct ShellState {
    pub app: App,
    pub client: Arc<IdentityClient>,
}

pub fn shell_router(state: ShellState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/controls/{control_id}", post(activate_control))
        .route("/config.json", get(sdk_config))
        .with_state(state)
}

fn visitor(cookies: &Cookies) -> Visitor {
    match cookies.get(SESSION_COOKIE) {
        Some(cookie) => Visitor::with_session(cookie.value()),
        None => Visitor::anonymous(),
    }
}

async fn index(cookies: Cookies, State(state): State<ShellState>) -> Html<String> {
    let view = state.app.render(&visitor(&cookies)).await;
    let body = view.to_html_with(&HtmlOptions::with_controls_path(CONTROLS_PATH));
    Html(page(&body))
}

async fn activate_control(
    Path(control_id): Path<String>,
    cookies: Cookies,
    State(state): State<ShellState>,
) -> Response {
    let view = state.app.render(&visitor(&cookies)).await;
    if let Err(UiError::UnknownControl(control)) = view.activate(&control_id) {
        warn!(control, "activation of unknown control");
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("unknown control '{control}'")})),
        )
            .into_response();
    }

    if control_id != SIGN_OUT_CONTROL {
        return Redirect::to("/").into_response();
    }

    info!("sign-out requested");
    cookies.remove(Cookie::new(SESSION_COOKIE, ""));
    match state.client.logout_url() {
        Ok(url) => Redirect::to(&url).into_response(),
        Err(e) => {
            warn!(error = %e, "hosted logout unavailable");
            Redirect::to("/").into_response()
        }
    }
}

async fn sdk_config(State(state): State<ShellState>) -> Json<AppConfig> {
    Json(state.client.config().clone())
}

fn page(body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Recipes</title></head>\n<body><div id=\"root\">{body}</div></body>\n</html>\n"
    )
}

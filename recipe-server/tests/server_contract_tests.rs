use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use recipe_api::InMemoryRecipeStore;
use recipe_auth::{
    AuthBoundary, Bootstrap, HostedUiBoundary, Principal, SignOut, StaticBoundary, Visitor,
};
use recipe_config::AppConfig;
use recipe_server::{AppState, app_router, shell::SESSION_COOKIE};
use serde_json::Value;

fn identity_config() -> AppConfig {
    AppConfig::from_source(HashMap::from([
        ("VITE_USER_POOL_ID", "us-east-1_ABC123"),
        ("VITE_USER_POOL_CLIENT_ID", "client-xyz"),
        ("VITE_COGNITO_DOMAIN", "recipes.auth.us-east-1.amazoncognito.com"),
        ("VITE_REDIRECT_SIGN_IN", "http://localhost:8080/"),
        ("VITE_REDIRECT_SIGN_OUT", "http://localhost:8080/"),
        ("VITE_API_ENDPOINT", "http://localhost:8080"),
        ("VITE_AWS_REGION", "us-east-1"),
    ]))
}

async fn spawn_server(boundary: Arc<dyn AuthBoundary>) -> (String, tokio::task::JoinHandle<()>) {
    let client = Bootstrap::new().configure(identity_config()).expect("configure identity");
    let state = AppState::new(client, boundary, Arc::new(InMemoryRecipeStore::new()));
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server run");
    });

    (format!("http://{}", addr), handle)
}

fn no_redirects() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
}

#[tokio::test]
async fn signed_in_page_and_sign_out() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let boundary = StaticBoundary::authenticated(
        Some(Principal::new("alice")),
        SignOut::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let (base, handle) = spawn_server(Arc::new(boundary)).await;
    let client = no_redirects();

    let page = client
        .get(format!("{}/", base))
        .send()
        .await
        .expect("page response")
        .text()
        .await
        .expect("page body");
    assert!(page.contains("<h1>Welcome alice</h1>"));
    assert!(page.contains(r#"action="/controls/sign-out""#));
    assert_eq!(count.load(Ordering::SeqCst), 0);

    let response = client
        .post(format!("{}/controls/sign-out", base))
        .send()
        .await
        .expect("sign-out response");
    assert_eq!(response.status(), 303);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("location header");
    assert!(location.starts_with("https://recipes.auth.us-east-1.amazoncognito.com/logout?"));
    assert_eq!(count.load(Ordering::SeqCst), 1);

    let unknown = client
        .post(format!("{}/controls/launch", base))
        .send()
        .await
        .expect("unknown control response");
    assert_eq!(unknown.status(), 404);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    handle.abort();
}

#[tokio::test]
async fn anonymous_page_links_to_hosted_sign_in() {
    let client_boundary = Bootstrap::new().configure(identity_config()).expect("configure");
    let boundary = HostedUiBoundary::new(client_boundary);
    let (base, handle) = spawn_server(Arc::new(boundary)).await;

    let page = reqwest::get(format!("{}/", base))
        .await
        .expect("page response")
        .text()
        .await
        .expect("page body");
    assert!(page.contains("<h1>Sign in</h1>"));
    assert!(page.contains("https://recipes.auth.us-east-1.amazoncognito.com/oauth2/authorize?"));
    assert!(!page.contains("sign-out"));

    handle.abort();
}

#[tokio::test]
async fn serves_sdk_config_and_api() {
    let (base, handle) = spawn_server(Arc::new(StaticBoundary::unauthenticated())).await;

    let config: Value = reqwest::get(format!("{}/config.json", base))
        .await
        .expect("config response")
        .json()
        .await
        .expect("config json");
    assert_eq!(config["Auth"]["Cognito"]["userPoolId"], "us-east-1_ABC123");
    assert_eq!(config["Auth"]["Cognito"]["loginWith"]["oauth"]["responseType"], "token");
    assert_eq!(config["API"]["endpoints"][0]["name"], "RecipeAPI");

    let hello = reqwest::get(format!("{}/hello", base)).await.expect("hello response");
    assert_eq!(hello.status(), 200);

    let missing = reqwest::get(format!("{}/nowhere", base)).await.expect("fallback response");
    assert_eq!(missing.status(), 404);

    handle.abort();
}

fn with_session(session_id: &str) -> reqwest::Client {
    let mut headers = reqwest::header::HeaderMap::new();
    let cookie = format!("{}={}", SESSION_COOKIE, session_id);
    headers.insert(reqwest::header::COOKIE, cookie.parse().expect("cookie header"));
    reqwest::Client::builder()
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
}

#[tokio::test]
async fn hosted_sessions_stay_with_their_visitor() {
    let client = Bootstrap::new().configure(identity_config()).expect("configure");
    let boundary = HostedUiBoundary::new(client);
    let session_id = boundary.establish(Principal::new("alice"));
    let (base, handle) = spawn_server(Arc::new(boundary.clone())).await;

    let alice = with_session(&session_id);
    let stranger = no_redirects();

    let page = alice.get(format!("{}/", base)).send().await.expect("alice page");
    assert!(page.text().await.expect("alice body").contains("<h1>Welcome alice</h1>"));

    let page = stranger.get(format!("{}/", base)).send().await.expect("stranger page");
    let body = page.text().await.expect("stranger body");
    assert!(body.contains("<h1>Sign in</h1>"));
    assert!(!body.contains("alice"));

    let forged = with_session("not-a-session")
        .get(format!("{}/", base))
        .send()
        .await
        .expect("forged page")
        .text()
        .await
        .expect("forged body");
    assert!(forged.contains("<h1>Sign in</h1>"));

    let response = stranger
        .post(format!("{}/controls/sign-out", base))
        .send()
        .await
        .expect("stranger sign-out");
    assert_eq!(response.status(), 404);
    assert!(boundary.resolve(&Visitor::with_session(&session_id)).await.is_authenticated());

    let response = alice
        .post(format!("{}/controls/sign-out", base))
        .send()
        .await
        .expect("alice sign-out");
    assert_eq!(response.status(), 303);
    let cleared = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("session cookie cleared");
    assert!(cleared.starts_with(&format!("{}=", SESSION_COOKIE)));
    assert_eq!(boundary.session_count(), 0);

    handle.abort();
}

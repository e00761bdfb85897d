use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use catalog_api::auth::{generate_jwt, Claims};
use catalog_api::catalog::memory::MemoryCatalogStore;
use catalog_api::config;
use catalog_api::handlers::{app, AppState};

/// Build the full router over a fresh in-memory store. The store handle is
/// returned too so tests can assert on persisted state directly.
pub fn test_app() -> (Router, Arc<MemoryCatalogStore>) {
    let store = Arc::new(MemoryCatalogStore::new());
    let router = app(AppState { store: store.clone() });
    (router, store)
}

/// Mint a valid bearer token the same way a successful login would.
pub fn bearer_token() -> String {
    let username = config::config().security.admin_username.clone();
    generate_jwt(Claims::new(username)).expect("token generation")
}

/// Drive one request through the router and decode the JSON response.
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, json)
}

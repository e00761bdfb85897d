mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_endpoint_is_public() -> Result<()> {
    let (app, _store) = common::test_app();

    let (status, body) = common::send(&app, "GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "API is running!"}));
    Ok(())
}

#[tokio::test]
async fn login_issues_usable_token() -> Result<()> {
    let (app, _store) = common::test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"username": "admin", "password": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().expect("access_token").to_string();

    let (status, _body) = common::send(&app, "GET", "/products", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<()> {
    let (app, _store) = common::test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"username": "admin", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid credentials"}));

    let (status, _body) = common::send(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"username": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn catalog_routes_require_a_valid_token() -> Result<()> {
    let (app, _store) = common::test_app();

    // No token at all
    let (status, body) = common::send(&app, "GET", "/products", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    // Garbage token
    let (status, _body) =
        common::send(&app, "GET", "/products", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Mutating routes are gated too
    let (status, _body) = common::send(
        &app,
        "POST",
        "/products",
        None,
        Some(json!({"name": "Widget", "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

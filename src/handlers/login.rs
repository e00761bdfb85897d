use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /login - fixed-credential check, issues a bearer token
pub async fn login_post(Json(payload): Json<LoginRequest>) -> Result<Json<Value>, ApiError> {
    let security = &config::config().security;

    let credentials_ok = !security.admin_username.is_empty()
        && payload.username.as_deref() == Some(security.admin_username.as_str())
        && payload.password.as_deref() == Some(security.admin_password.as_str());

    if !credentials_ok {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = Claims::new(security.admin_username.clone());
    let token = generate_jwt(claims).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal_server_error("Failed to generate token")
    })?;

    Ok(Json(json!({ "access_token": token })))
}

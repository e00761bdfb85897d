use axum::response::Json;
use serde_json::{json, Value};

/// GET / - liveness check, no auth required
pub async fn health_get() -> Json<Value> {
    Json(json!({ "status": "API is running!" }))
}

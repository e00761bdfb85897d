use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use crate::catalog::service;
use crate::error::ApiError;

use super::super::AppState;

/// POST /products - create a product; the store assigns the id and the
/// response echoes only the inserted fields.
pub async fn products_post(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (name, price) = service::create_product(state.store.as_ref(), &payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "name": name, "price": price }))))
}

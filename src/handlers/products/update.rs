use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::catalog::service;
use crate::error::ApiError;

use super::super::AppState;

/// PUT /products/:id - full replace of name and price
pub async fn product_put(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    service::update_product(state.store.as_ref(), &id, &payload).await?;
    Ok(Json(json!({ "message": "Product updated successfully" })))
}

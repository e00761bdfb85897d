use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::catalog::service;
use crate::error::ApiError;

use super::super::AppState;

/// DELETE /products/:id - remove a product; irreversible
pub async fn product_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    service::delete_product(state.store.as_ref(), &id).await?;
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

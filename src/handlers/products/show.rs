use axum::extract::{Path, State};
use axum::response::Json;

use crate::catalog::{service, Product};
use crate::error::ApiError;

use super::super::AppState;

/// GET /products/:id - fetch a single product
pub async fn product_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = service::get_product(state.store.as_ref(), &id).await?;
    Ok(Json(product))
}

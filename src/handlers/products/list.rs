use axum::extract::State;
use axum::response::Json;

use crate::catalog::{service, Product};
use crate::error::ApiError;

use super::super::AppState;

/// GET /products - list every product, id rendered as a hex string
pub async fn products_get(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = service::list_products(state.store.as_ref()).await?;
    Ok(Json(products))
}

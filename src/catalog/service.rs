//! Catalog operations: validated request in, store mutation out.
//!
//! Every check runs before the mutating store call, so rejected input never
//! causes a partial write. Id parsing failures surface as `InvalidId` and
//! never reach the store.

use serde_json::Value;

use super::product::{Product, ProductId};
use super::store::{CatalogError, CatalogStore};
use super::validate;

pub async fn list_products(store: &dyn CatalogStore) -> Result<Vec<Product>, CatalogError> {
    store.list().await
}

pub async fn get_product(store: &dyn CatalogStore, id: &str) -> Result<Product, CatalogError> {
    let id = ProductId::parse(id).map_err(|_| CatalogError::InvalidId)?;
    store.find_by_id(&id).await?.ok_or(CatalogError::NotFound)
}

/// Create a product from a raw JSON payload.
///
/// Checks run in a fixed order: name shape, then the
/// duplicate-name lookup, then price shape. The duplicate check and the
/// insert are not atomic; concurrent creates with the same name can race,
/// which is accepted.
pub async fn create_product(
    store: &dyn CatalogStore,
    payload: &Value,
) -> Result<(String, f64), CatalogError> {
    let name_field = payload.get("name");
    if !validate::valid_name(name_field) {
        return Err(CatalogError::InvalidName);
    }
    let name = name_field.and_then(Value::as_str).unwrap_or_default().to_string();

    if store.find_by_name(&name).await?.is_some() {
        return Err(CatalogError::DuplicateName);
    }

    let price_field = payload.get("price");
    if !validate::valid_price(price_field) {
        return Err(CatalogError::InvalidPrice);
    }
    let price = price_field.and_then(Value::as_f64).unwrap_or_default();

    store.insert(&name, price).await?;
    Ok((name, price))
}

/// Replace both fields of an existing product.
///
/// No duplicate-name re-check here; only create guards name uniqueness.
/// Field validation precedes id parsing.
pub async fn update_product(
    store: &dyn CatalogStore,
    id: &str,
    payload: &Value,
) -> Result<(), CatalogError> {
    let name_field = payload.get("name");
    if !validate::valid_name(name_field) {
        return Err(CatalogError::InvalidName);
    }
    let price_field = payload.get("price");
    if !validate::valid_price(price_field) {
        return Err(CatalogError::InvalidPrice);
    }

    let id = ProductId::parse(id).map_err(|_| CatalogError::InvalidId)?;
    let name = name_field.and_then(Value::as_str).unwrap_or_default();
    let price = price_field.and_then(Value::as_f64).unwrap_or_default();

    store.update(&id, name, price).await
}

pub async fn delete_product(store: &dyn CatalogStore, id: &str) -> Result<(), CatalogError> {
    let id = ProductId::parse(id).map_err(|_| CatalogError::InvalidId)?;
    store.delete(&id).await
}

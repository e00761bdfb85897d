use super::store::{CatalogError, CatalogStore};

/// Fixed sample catalog inserted into an empty collection at startup.
pub const SAMPLE_PRODUCTS: [(&str, f64); 3] = [
    ("Product 1", 10.99),
    ("Product 2", 15.49),
    ("Product 3", 7.99),
];

/// Seed the collection once: a no-op whenever any data already exists.
/// Returns whether seeding happened.
pub async fn seed_if_empty(store: &dyn CatalogStore) -> Result<bool, CatalogError> {
    if store.count().await? > 0 {
        return Ok(false);
    }

    for (name, price) in SAMPLE_PRODUCTS {
        store.insert(name, price).await?;
    }
    tracing::info!("seeded catalog with {} sample products", SAMPLE_PRODUCTS.len());
    Ok(true)
}

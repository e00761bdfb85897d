use async_trait::async_trait;
use thiserror::Error;

use super::product::{Product, ProductId};

/// Catalog operation failures, already phrased for the client.
///
/// `Unavailable` is the exception: the real cause is logged at the API
/// boundary and the client only sees a generic message.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Name must be a non-empty string")]
    InvalidName,

    #[error("Price must be a non-empty, non-negative number")]
    InvalidPrice,

    #[error("A product with the same name already exists")]
    DuplicateName,

    #[error("Invalid ID format")]
    InvalidId,

    #[error("Product not found")]
    NotFound,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Keyed single-document operations over the product collection.
///
/// One store handle is built at startup and shared through axum state; each
/// method issues exactly one driver call, with no retries and no in-process
/// locking across calls.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, CatalogError>;

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;

    /// Case-sensitive exact-match lookup, used by the create pre-check.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, CatalogError>;

    /// Insert a new document; the store assigns the id.
    async fn insert(&self, name: &str, price: f64) -> Result<ProductId, CatalogError>;

    /// Full replace of both fields. `NotFound` if no document matched.
    async fn update(&self, id: &ProductId, name: &str, price: f64) -> Result<(), CatalogError>;

    /// `NotFound` if no document was removed.
    async fn delete(&self, id: &ProductId) -> Result<(), CatalogError>;

    async fn count(&self) -> Result<u64, CatalogError>;
}

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::product::{Product, ProductId};
use super::store::{CatalogError, CatalogStore};

/// In-memory catalog store with the same observable semantics as the Mongo
/// adapter. Backs the integration tests and local development without a
/// running MongoDB.
#[derive(Default)]
pub struct MemoryCatalogStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id() -> ProductId {
        let mut bytes = [0u8; 12];
        bytes.copy_from_slice(&Uuid::new_v4().as_bytes()[..12]);
        ProductId::from_bytes(bytes)
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, CatalogError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.name == name).cloned())
    }

    async fn insert(&self, name: &str, price: f64) -> Result<ProductId, CatalogError> {
        let id = Self::generate_id();
        self.products.write().await.push(Product {
            id,
            name: name.to_string(),
            price,
        });
        Ok(id)
    }

    async fn update(&self, id: &ProductId, name: &str, price: f64) -> Result<(), CatalogError> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id == *id) {
            Some(product) => {
                product.name = name.to_string();
                product.price = price;
                Ok(())
            }
            None => Err(CatalogError::NotFound),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<(), CatalogError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != *id);
        if products.len() == before {
            return Err(CatalogError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, CatalogError> {
        Ok(self.products.read().await.len() as u64)
    }
}

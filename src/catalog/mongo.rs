use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::config::DatabaseConfig;

use super::product::{Product, ProductId};
use super::store::{CatalogError, CatalogStore};

/// MongoDB-backed catalog store. Documents carry only `name` and `price`;
/// the driver assigns `_id` on insert.
pub struct MongoCatalogStore {
    collection: Collection<Document>,
}

impl MongoCatalogStore {
    /// Build the shared client from configuration. The driver connects
    /// lazily, so the first real health signal is the seeding count at
    /// startup.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, CatalogError> {
        let mut options = ClientOptions::parse(&config.url).await.map_err(store_error)?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_selection_timeout =
            Some(Duration::from_secs(config.server_selection_timeout_secs));

        let client = Client::with_options(options).map_err(store_error)?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        Ok(Self { collection })
    }
}

#[async_trait]
impl CatalogStore for MongoCatalogStore {
    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let mut cursor = self.collection.find(doc! {}, None).await.map_err(store_error)?;

        let mut products = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(store_error)? {
            products.push(product_from_document(document)?);
        }
        Ok(products)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let filter = doc! { "_id": object_id(id) };
        let found = self.collection.find_one(filter, None).await.map_err(store_error)?;
        found.map(product_from_document).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, CatalogError> {
        let filter = doc! { "name": name };
        let found = self.collection.find_one(filter, None).await.map_err(store_error)?;
        found.map(product_from_document).transpose()
    }

    async fn insert(&self, name: &str, price: f64) -> Result<ProductId, CatalogError> {
        let document = doc! { "name": name, "price": price };
        let result = self.collection.insert_one(document, None).await.map_err(store_error)?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(ProductId::from_bytes(oid.bytes())),
            other => Err(CatalogError::Unavailable(format!(
                "unexpected inserted id type: {:?}",
                other.element_type()
            ))),
        }
    }

    async fn update(&self, id: &ProductId, name: &str, price: f64) -> Result<(), CatalogError> {
        let filter = doc! { "_id": object_id(id) };
        let update = doc! { "$set": { "name": name, "price": price } };
        let result = self
            .collection
            .update_one(filter, update, None)
            .await
            .map_err(store_error)?;

        if result.matched_count == 0 {
            return Err(CatalogError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), CatalogError> {
        let filter = doc! { "_id": object_id(id) };
        let result = self.collection.delete_one(filter, None).await.map_err(store_error)?;

        if result.deleted_count == 0 {
            return Err(CatalogError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, CatalogError> {
        self.collection.count_documents(doc! {}, None).await.map_err(store_error)
    }
}

fn object_id(id: &ProductId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

fn store_error(err: mongodb::error::Error) -> CatalogError {
    CatalogError::Unavailable(err.to_string())
}

fn product_from_document(document: Document) -> Result<Product, CatalogError> {
    let oid = document
        .get_object_id("_id")
        .map_err(|e| CatalogError::Unavailable(format!("malformed document id: {}", e)))?;
    let name = document
        .get_str("name")
        .map_err(|e| CatalogError::Unavailable(format!("malformed document name: {}", e)))?
        .to_string();

    // Numbers written by other clients may land as int32/int64.
    let price = match document.get("price") {
        Some(Bson::Double(p)) => *p,
        Some(Bson::Int32(p)) => f64::from(*p),
        Some(Bson::Int64(p)) => *p as f64,
        _ => return Err(CatalogError::Unavailable("malformed document price".to_string())),
    };

    Ok(Product {
        id: ProductId::from_bytes(oid.bytes()),
        name,
        price,
    })
}

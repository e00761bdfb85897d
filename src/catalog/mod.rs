pub mod memory;
pub mod mongo;
pub mod product;
pub mod seed;
pub mod service;
pub mod store;
pub mod validate;

pub use product::{Product, ProductId};
pub use store::{CatalogError, CatalogStore};

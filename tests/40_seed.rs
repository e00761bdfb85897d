mod common;

use anyhow::Result;
use axum::http::StatusCode;
use catalog_api::catalog::seed::{seed_if_empty, SAMPLE_PRODUCTS};
use catalog_api::catalog::CatalogStore;
use serde_json::json;

#[tokio::test]
async fn empty_collection_gets_exactly_three_products() -> Result<()> {
    let (app, store) = common::test_app();
    let token = common::bearer_token();

    assert!(seed_if_empty(store.as_ref()).await?);
    assert_eq!(store.count().await?, 3);

    let (status, listed) = common::send(&app, "GET", "/products", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let items = listed.as_array().expect("array");
    assert_eq!(items.len(), 3);

    for ((name, price), item) in SAMPLE_PRODUCTS.iter().zip(items) {
        assert_eq!(item["name"], json!(name));
        assert_eq!(item["price"], json!(price));
    }
    Ok(())
}

#[tokio::test]
async fn reseeding_a_populated_collection_changes_nothing() -> Result<()> {
    let (_app, store) = common::test_app();

    assert!(seed_if_empty(store.as_ref()).await?);
    assert!(!seed_if_empty(store.as_ref()).await?);
    assert_eq!(store.count().await?, 3);
    Ok(())
}

#[tokio::test]
async fn any_existing_data_suppresses_seeding() -> Result<()> {
    let (_app, store) = common::test_app();

    store.insert("Existing", 1.0).await?;
    assert!(!seed_if_empty(store.as_ref()).await?);
    assert_eq!(store.count().await?, 1);
    Ok(())
}

use std::sync::Arc;

use catalog_api::catalog::mongo::MongoCatalogStore;
use catalog_api::catalog::seed::seed_if_empty;
use catalog_api::config;
use catalog_api::handlers::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up CATALOG_DB_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting catalog API in {:?} mode", config.environment);

    let store = MongoCatalogStore::connect(&config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to configure catalog store: {}", e));

    // First real store round-trip; connectivity failure here is fatal.
    match seed_if_empty(&store).await {
        Ok(true) => tracing::info!("catalog collection seeded"),
        Ok(false) => tracing::debug!("catalog collection already populated, skipping seed"),
        Err(e) => panic!("failed to initialize catalog collection: {}", e),
    }

    let state = AppState { store: Arc::new(store) };
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("catalog API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::CatalogStore;
use crate::middleware::jwt_auth_middleware;

pub mod health;
pub mod login;
pub mod products;

/// Shared application state: the one store handle built at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

/// Assemble the full router. Kept out of `main` so integration tests can
/// drive the service in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(health::health_get))
        .route("/login", axum::routing::post(login::login_post))
        // Protected catalog API
        .merge(product_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::products_get).post(products::products_post),
        )
        .route(
            "/products/:id",
            get(products::product_get)
                .put(products::product_put)
                .delete(products::product_delete),
        )
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware))
}

use axum::{
    Router,
    routing::{get, put},
};

use crate::db::catalog::ProductCatalog;
use crate::server::handlers;

/// Shared state handed to every handler: just the pool-backed catalog.
#[derive(Clone)]
pub struct CatalogState {
    pub catalog: ProductCatalog,
}

impl CatalogState {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self { catalog }
    }
}

pub fn catalog_router(state: CatalogState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::add_product),
        )
        .route("/products/{id}", put(handlers::update_product))
        .route("/products/export", get(handlers::export_products))
        .with_state(state)
}

//! Database module: schema, row models, and the catalog storage layer.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `models.rs`: Rust structs mirroring DB rows
//! - `catalog.rs`: pool-backed CRUD over the `products` table

pub mod catalog;
pub mod models;
pub mod schema;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::CatalogError;

pub use catalog::{ProductCatalog, SqlitePool};
pub use models::Product;
pub use schema::SQLITE_INIT;

/// Open the pool for `database_url`, initialize the schema, and return the
/// ready-to-use catalog. Pool acquisition is capped at a fixed timeout;
/// expiry surfaces as a connection error.
pub async fn connect(database_url: &str) -> Result<ProductCatalog, CatalogError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| CatalogError::Connection(e.to_string()))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(opts)
        .await?;

    let catalog = ProductCatalog::new(pool);
    catalog.init_schema().await?;
    Ok(catalog)
}

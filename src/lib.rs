pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod server;

pub use db::catalog::ProductCatalog;
pub use db::models::Product;
pub use error::CatalogError;

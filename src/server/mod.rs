pub mod handlers;
pub mod router;

pub use router::{CatalogState, catalog_router};

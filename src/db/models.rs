use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `products` table. The id is database-assigned on insert
/// and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

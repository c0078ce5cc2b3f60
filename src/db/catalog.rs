use sqlx::{Pool, Sqlite};

use crate::db::models::Product;
use crate::db::schema::SQLITE_INIT;
use crate::error::CatalogError;

pub type SqlitePool = Pool<Sqlite>;

/// Storage layer for the `products` table. Owns the pool; every operation
/// acquires a connection for the duration of a single statement and holds
/// no row state across calls.
#[derive(Clone)]
pub struct ProductCatalog {
    pool: SqlitePool,
}

impl ProductCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CatalogError> {
        // execute statement-by-statement (sqlx::query rejects multi-commands)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// All products, ordered by ascending id. New rows always sort last
    /// because ids are assigned monotonically.
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let rows = sqlx::query_as::<_, Product>(
            "SELECT id, name, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Products whose name contains `query` case-insensitively, in list
    /// order. The empty query means no filter; no match is an empty Vec.
    /// Narrowing happens in process so `%`/`_` in user input stay literal.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let needle = query.to_lowercase();
        let mut rows = self.list().await?;
        if !needle.is_empty() {
            rows.retain(|p| p.name.to_lowercase().contains(&needle));
        }
        Ok(rows)
    }

    /// Insert a new product and return it with its database-assigned id.
    /// Duplicate names are permitted. Invalid input fails before the
    /// database is touched.
    pub async fn add(&self, name: &str, price: f64) -> Result<Product, CatalogError> {
        validate_name(name)?;
        validate_price(price)?;

        let result = sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
            .bind(name)
            .bind(price)
            .execute(&self.pool)
            .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            price,
        })
    }

    /// Replace `name` and `price` for the row matching `id`. Zero rows
    /// affected means the id does not exist and is reported as NotFound.
    /// Repeating the call with identical arguments leaves the row unchanged.
    pub async fn update(&self, id: i64, name: &str, price: f64) -> Result<Product, CatalogError> {
        validate_name(name)?;
        validate_price(price)?;

        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(name)
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(id));
        }

        Ok(Product {
            id,
            name: name.to_string(),
            price,
        })
    }
}

/// Non-empty after trimming surrounding whitespace. The name is stored as
/// supplied; the trim is only for the emptiness check.
fn validate_name(name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation("name required".to_string()));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), CatalogError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::Validation(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

//! SQL DDL for initializing the product table.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT (monotonic, never reused)
/// - `name` TEXT; the non-empty rule is enforced by the caller, not here
/// - `price` REAL; the non-negative rule is enforced by the caller, not here
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL DEFAULT 0
);
"#;

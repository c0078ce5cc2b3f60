use figment::{Figment, providers::Env};
use serde::Deserialize;

use crate::error::CatalogError;

/// Process configuration, sourced from the environment (and `.env` via
/// dotenvy in `main`). `DATABASE_URL` is required; everything else has a
/// default. Loaded once at startup and passed in explicitly — business code
/// never reads ambient state.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Config {
    /// Extract the configuration from the environment. A missing
    /// `DATABASE_URL` fails here, before any server or pool is created.
    pub fn load() -> Result<Self, CatalogError> {
        Figment::new()
            .merge(Env::raw().only(&["DATABASE_URL", "LISTEN_ADDR", "LOGLEVEL"]))
            .extract()
            .map_err(|e| CatalogError::Connection(format!("configuration: {e}")))
    }
}

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CatalogError {
    /// Database unreachable, pool acquisition timed out, or configuration
    /// missing. Fatal to the current operation; nothing is retried.
    #[error("database connection error: {0}")]
    Connection(String),

    /// A statement failed for a reason other than connectivity.
    #[error("query failed: {0}")]
    Query(String),

    /// Input failed a business rule; the database is never touched.
    #[error("{0}")]
    Validation(String),

    /// An update targeted an id with no matching row.
    #[error("product {0} not found")]
    NotFound(i64),

    /// Workbook serialization failed.
    #[error("workbook export failed: {0}")]
    Export(String),
}

impl From<SqlxError> for CatalogError {
    fn from(e: SqlxError) -> Self {
        match e {
            SqlxError::Io(_)
            | SqlxError::Tls(_)
            | SqlxError::Configuration(_)
            | SqlxError::PoolTimedOut
            | SqlxError::PoolClosed => CatalogError::Connection(e.to_string()),
            other => CatalogError::Query(other.to_string()),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for CatalogError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        CatalogError::Export(e.to_string())
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            CatalogError::Validation(msg) => {
                let body = ApiErrorBody {
                    code: "VALIDATION_ERROR".to_string(),
                    message: msg,
                };
                (StatusCode::BAD_REQUEST, body)
            }
            CatalogError::NotFound(id) => {
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("product {id} not found"),
                };
                (StatusCode::NOT_FOUND, body)
            }
            CatalogError::Connection(msg) | CatalogError::Query(msg) => {
                let body = ApiErrorBody {
                    code: "DATABASE_ERROR".to_string(),
                    message: format!("database error: {msg}"),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            CatalogError::Export(msg) => {
                let body = ApiErrorBody {
                    code: "EXPORT_ERROR".to_string(),
                    message: format!("export failed: {msg}"),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::db::models::Product;
use crate::error::CatalogError;
use crate::export;
use crate::server::router::CatalogState;

#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// List all products, or the case-insensitive name matches when `?q=` is
/// present. An empty `q` behaves like no filter.
pub async fn list_products(
    State(state): State<CatalogState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>, CatalogError> {
    let rows = match params.q.as_deref() {
        Some(q) => state.catalog.search(q).await?,
        None => state.catalog.list().await?,
    };
    Ok(Json(rows))
}

pub async fn add_product(
    State(state): State<CatalogState>,
    Json(form): Json<ProductForm>,
) -> Result<Response, CatalogError> {
    let product = state.catalog.add(&form.name, form.price).await?;
    info!(id = product.id, name = %product.name, "product added");
    Ok((StatusCode::CREATED, Json(product)).into_response())
}

pub async fn update_product(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    Json(form): Json<ProductForm>,
) -> Result<Json<Product>, CatalogError> {
    let product = state.catalog.update(id, &form.name, form.price).await?;
    info!(id = product.id, "product updated");
    Ok(Json(product))
}

/// Serialize the currently displayed (possibly `?q=`-filtered) list into a
/// downloadable workbook.
pub async fn export_products(
    State(state): State<CatalogState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, CatalogError> {
    let rows = state.catalog.search(params.q.as_deref().unwrap_or("")).await?;
    let bytes = export::export_to_workbook(&export::project(&rows))?;
    info!(rows = rows.len(), "workbook exported");

    let headers = [
        (header::CONTENT_TYPE, export::WORKBOOK_MIME.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export::WORKBOOK_FILENAME),
        ),
    ];
    Ok((headers, bytes).into_response())
}

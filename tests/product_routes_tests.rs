use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use prodcat::server::router::{CatalogState, catalog_router};

async fn temp_app(tag: &str) -> (Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "prodcat-routes-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let catalog = prodcat::db::connect(&database_url)
        .await
        .expect("failed to open catalog database");

    let state = CatalogState::new(catalog);
    (catalog_router(state), temp_path)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not json")
}

#[tokio::test]
async fn post_then_get_products_round_trips() {
    let (app, path) = temp_app("post-get").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products",
            json!({"name": "Widget", "price": 9.99}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["name"], "Widget");
    assert_eq!(created["price"], 9.99);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/products")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let listed = body_json(resp).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["name"], "Widget");

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn blank_name_returns_validation_error_body() {
    let (app, path) = temp_app("blank-name").await;

    let resp = app
        .oneshot(json_request(
            "POST",
            "/products",
            json!({"name": "   ", "price": 1.0}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "name required");

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn put_unknown_id_returns_not_found() {
    let (app, path) = temp_app("put-missing").await;

    let resp = app
        .oneshot(json_request(
            "PUT",
            "/products/42",
            json!({"name": "Ghost", "price": 1.0}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn put_replaces_name_and_price() {
    let (app, path) = temp_app("put").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products",
            json!({"name": "Widget", "price": 9.99}),
        ))
        .await
        .expect("request failed");
    let created = body_json(resp).await;
    let id = created["id"].as_i64().expect("missing id");

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/products/{id}"),
            json!({"name": "Widget Pro", "price": 12.0}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Widget Pro");
    assert_eq!(updated["price"], 12.0);

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn query_parameter_filters_the_list() {
    let (app, path) = temp_app("query").await;

    for (name, price) in [("Widget", 9.99), ("Gadget", 19.5)] {
        let resp = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/products",
                json!({"name": name, "price": price}),
            ))
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/products?q=gad")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let listed = body_json(resp).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["name"], "Gadget");

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn export_route_serves_a_workbook_download() {
    let (app, path) = temp_app("export").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products",
            json!({"name": "Widget", "price": 9.99}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/products/export")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some(prodcat::export::WORKBOOK_MIME)
    );
    assert_eq!(
        resp.headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok()),
        Some(r#"attachment; filename="products.xlsx""#)
    );

    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(&bytes[..2], b"PK");

    let _ = fs::remove_file(&path);
}

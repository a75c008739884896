//! Shared helpers for API integration tests.
//!
//! The app is built with the production router and middleware stack, backed
//! by an in-memory catalog store so tests run without a database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use randomweb_api::config::ServerConfig;
use randomweb_api::router::build_app_router;
use randomweb_api::state::AppState;
use randomweb_db::{Catalog, CatalogStore, MemoryCatalogStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given in-memory store.
///
/// Keep a clone of the `Arc` to approve sites the way a moderator would.
pub fn build_test_app(store: Arc<MemoryCatalogStore>) -> Router {
    build_test_app_with(store)
}

/// Build the application router over any store implementation.
pub fn build_test_app_with(store: Arc<dyn CatalogStore>) -> Router {
    let state = AppState {
        catalog: Catalog::new(store),
    };
    build_app_router(state, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

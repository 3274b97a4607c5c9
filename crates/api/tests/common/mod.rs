#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use wallhub_api::config::ServerConfig;
use wallhub_api::router::build_app_router;
use wallhub_api::state::AppState;
use wallhub_core::wallpaper::{GenreRecord, WallpaperRecord};
use wallhub_db::{Catalog, DbError, DynSource, MockSource, SourceConfig, WallpaperSource};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        source: SourceConfig::Mock {
            latency: std::time::Duration::ZERO,
        },
    }
}

/// Build the full application router over `source`, with the same
/// middleware stack production uses.
pub fn build_test_app(source: DynSource) -> Router {
    build_app_router(AppState { source }, &test_config())
}

/// App backed by the bundled fixture catalog.
pub fn fixture_app() -> Router {
    build_test_app(Arc::new(MockSource::builtin().expect("bundled catalog parses")))
}

/// The bundled fixture catalog, for computing expectations.
pub fn fixture_catalog() -> Catalog {
    Catalog::builtin().expect("bundled catalog parses")
}

/// Source whose every fetch fails, standing in for an unreachable store.
pub struct FailingSource;

#[async_trait]
impl WallpaperSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch_wallpapers(&self) -> Result<Vec<WallpaperRecord>, DbError> {
        Err(DbError::DuplicateWallpaper("wp-001".into()))
    }

    async fn fetch_genres(&self) -> Result<Vec<GenreRecord>, DbError> {
        Err(DbError::DuplicateGenre("nature".into()))
    }
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    app.oneshot(request).await.expect("infallible router")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("JSON body")
}

/// Extract the `id` field of every element in `json["data"]`.
pub fn data_ids(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|w| w["id"].as_str().expect("string id").to_string())
        .collect()
}

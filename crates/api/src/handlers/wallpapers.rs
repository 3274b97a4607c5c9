//! Handlers for wallpaper listing, trending, lookup and download.
//!
//! Every handler takes a fresh snapshot from the configured source and runs
//! the pure query engine over it, so concurrent requests never share state.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use wallhub_core::error::CoreError;
use wallhub_core::query::{self, DEFAULT_PAGE_SIZE, DEFAULT_TRENDING_COUNT};
use wallhub_core::wallpaper::{download_link, resolve_download_target, WallpaperRecord};

use crate::error::{AppError, AppResult};
use crate::query::{TrendingParams, WallpaperListParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a snapshot and find one wallpaper in it.
async fn find_wallpaper(state: &AppState, id: &str) -> AppResult<WallpaperRecord> {
    state
        .source
        .fetch_wallpapers()
        .await?
        .into_iter()
        .find(|w| w.id == id)
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Wallpaper",
                id: id.to_string(),
            })
        })
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/wallpapers
///
/// Filtered, sorted and limited wallpaper page.
pub async fn list_wallpapers(
    State(state): State<AppState>,
    params: Result<Query<WallpaperListParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;
    let records = state.source.fetch_wallpapers().await?;
    let spec = params.filter_spec();
    let page_size = params.page_size(DEFAULT_PAGE_SIZE);

    let results = query::query(&records, &spec, page_size);

    tracing::debug!(
        genre = ?spec.genre,
        search = ?spec.search,
        sort = ?spec.sort,
        page_size,
        results = results.len(),
        "Wallpaper query executed",
    );

    Ok(Json(DataResponse { data: results }).into_response())
}

/// GET /api/v1/wallpapers/trending
///
/// Featured wallpapers in provider order, optionally ranked by `sort`.
pub async fn trending_wallpapers(
    State(state): State<AppState>,
    params: Result<Query<TrendingParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;
    let records = state.source.fetch_wallpapers().await?;
    let count = params.page_size(DEFAULT_TRENDING_COUNT);
    let spec = params.filter_spec();

    let results = if spec.sort.is_some() {
        query::query(&records, &spec, count)
    } else {
        query::trending_slice(&records, count)
    };

    tracing::debug!(count, sort = ?spec.sort, results = results.len(), "Trending slice built");

    Ok(Json(DataResponse { data: results }).into_response())
}

// ---------------------------------------------------------------------------
// Single wallpaper
// ---------------------------------------------------------------------------

/// GET /api/v1/wallpapers/{id}
pub async fn get_wallpaper(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let wallpaper = find_wallpaper(&state, &id).await?;
    Ok(Json(DataResponse { data: wallpaper }))
}

/// GET /api/v1/wallpapers/{id}/download
///
/// Redirects to the download location (the alternate download URL when the
/// record has one, the display URL otherwise).
pub async fn download_wallpaper(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    let wallpaper = find_wallpaper(&state, &id).await?;
    let target = resolve_download_target(&wallpaper);

    tracing::info!(
        wallpaper_id = %wallpaper.id,
        download_target = target,
        "Wallpaper download requested",
    );

    Ok(Redirect::temporary(target))
}

/// GET /api/v1/wallpapers/{id}/download-link
///
/// The download target plus the filename a browser should save it under,
/// for clients that drive the download themselves.
pub async fn wallpaper_download_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let wallpaper = find_wallpaper(&state, &id).await?;
    Ok(Json(DataResponse {
        data: download_link(&wallpaper),
    })
    .into_response())
}

//! Handlers for genre navigation.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use wallhub_core::error::CoreError;
use wallhub_core::genre;
use wallhub_core::query::{self, DEFAULT_PAGE_SIZE};
use wallhub_core::wallpaper::{GenreRecord, WallpaperRecord};

use crate::error::{AppError, AppResult};
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload for a genre browse page.
#[derive(Debug, Serialize)]
pub struct GenreWallpapers<'a> {
    /// Genre display name, or the all-wallpapers heading for unknown slugs.
    pub heading: &'a str,
    pub wallpapers: Vec<&'a WallpaperRecord>,
}

/// Fetch genres and wallpapers together and fill in per-genre counts.
async fn counted_genres(state: &AppState) -> AppResult<Vec<GenreRecord>> {
    let (genres, wallpapers) = tokio::try_join!(
        state.source.fetch_genres(),
        state.source.fetch_wallpapers(),
    )?;
    Ok(genre::with_counts(&genres, &wallpapers))
}

/// GET /api/v1/genres
///
/// Every genre with the number of wallpapers tagged with it.
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = counted_genres(&state).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// GET /api/v1/genres/{slug}
pub async fn get_genre(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let genres = counted_genres(&state).await?;
    let found = genre::find_by_slug(&genres, &slug).cloned().ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id: slug.clone(),
        })
    })?;
    Ok(Json(DataResponse { data: found }))
}

/// GET /api/v1/genres/{slug}/wallpapers
///
/// Wallpapers tagged with `slug` in provider order. Unknown slugs yield an
/// empty page under the all-wallpapers heading rather than an error.
pub async fn genre_wallpapers(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;
    let (genres, wallpapers) = tokio::try_join!(
        state.source.fetch_genres(),
        state.source.fetch_wallpapers(),
    )?;
    let count = params.page_size(DEFAULT_PAGE_SIZE);

    let page = GenreWallpapers {
        heading: genre::heading(&genres, Some(&slug)),
        wallpapers: query::by_genre(&wallpapers, &slug, count),
    };

    tracing::debug!(genre = %slug, count, results = page.wallpapers.len(), "Genre page built");

    Ok(Json(DataResponse { data: page }).into_response())
}

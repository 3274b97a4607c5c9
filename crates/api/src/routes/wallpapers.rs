//! Route definitions for wallpapers.
//!
//! Mounted at `/wallpapers` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::wallpapers;
use crate::state::AppState;

/// Wallpaper routes mounted at `/wallpapers`.
///
/// ```text
/// GET /                  -> list_wallpapers
/// GET /trending          -> trending_wallpapers
/// GET /{id}              -> get_wallpaper
/// GET /{id}/download     -> download_wallpaper
/// GET /{id}/download-link -> wallpaper_download_link
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wallpapers::list_wallpapers))
        .route("/trending", get(wallpapers::trending_wallpapers))
        .route("/{id}", get(wallpapers::get_wallpaper))
        .route("/{id}/download", get(wallpapers::download_wallpaper))
        .route(
            "/{id}/download-link",
            get(wallpapers::wallpaper_download_link),
        )
}

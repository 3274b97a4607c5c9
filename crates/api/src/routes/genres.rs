//! Route definitions for genres.
//!
//! Mounted at `/genres` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Genre routes mounted at `/genres`.
///
/// ```text
/// GET /                     -> list_genres
/// GET /{slug}               -> get_genre
/// GET /{slug}/wallpapers    -> genre_wallpapers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(genres::list_genres))
        .route("/{slug}", get(genres::get_genre))
        .route("/{slug}/wallpapers", get(genres::genre_wallpapers))
}

pub mod genres;
pub mod health;
pub mod wallpapers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /genres                                  list genres with counts
/// /genres/{slug}                           single genre
/// /genres/{slug}/wallpapers                wallpapers in a genre (?limit=)
///
/// /wallpapers                              query (?genre=&search=&sort=&limit=&seed=)
/// /wallpapers/trending                     featured slice (?limit=&sort=&seed=)
/// /wallpapers/{id}                         single wallpaper
/// /wallpapers/{id}/download                redirect to download target
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/genres", genres::router())
        .nest("/wallpapers", wallpapers::router())
}

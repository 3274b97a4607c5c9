//! The data provider seam between storage and the query engine.

use async_trait::async_trait;
use wallhub_core::wallpaper::{GenreRecord, WallpaperRecord};

use crate::error::DbError;

/// Supplies snapshot collections of wallpapers and genres.
///
/// Each call returns a complete, independent snapshot; callers filter and
/// sort it with `wallhub_core::query`. Latency, retries and connection
/// handling stay behind this trait.
#[async_trait]
pub trait WallpaperSource: Send + Sync {
    /// Short identifier used in logs and health output.
    fn name(&self) -> &'static str;

    /// Every wallpaper, in provider order.
    async fn fetch_wallpapers(&self) -> Result<Vec<WallpaperRecord>, DbError>;

    /// Every genre, in provider order.
    async fn fetch_genres(&self) -> Result<Vec<GenreRecord>, DbError>;
}

//! Source backed by a JSON catalog document on disk.

use std::path::PathBuf;

use async_trait::async_trait;
use wallhub_core::wallpaper::{GenreRecord, WallpaperRecord};

use crate::catalog::Catalog;
use crate::error::DbError;
use crate::source::WallpaperSource;

/// Re-reads and validates the catalog file on every fetch, so edits to the
/// document show up on the next call.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and validate the whole catalog document.
    pub async fn load(&self) -> Result<Catalog, DbError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DbError::Io {
                path: self.path.clone(),
                source,
            })?;
        let catalog = Catalog::from_json(&json)?;
        tracing::debug!(
            path = %self.path.display(),
            genres = catalog.genres.len(),
            wallpapers = catalog.wallpapers.len(),
            "Catalog file loaded",
        );
        Ok(catalog)
    }
}

#[async_trait]
impl WallpaperSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_wallpapers(&self) -> Result<Vec<WallpaperRecord>, DbError> {
        Ok(self.load().await?.wallpapers)
    }

    async fn fetch_genres(&self) -> Result<Vec<GenreRecord>, DbError> {
        Ok(self.load().await?.genres)
    }
}

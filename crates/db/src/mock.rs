//! In-memory source backed by a fixed catalog.

use std::time::Duration;

use async_trait::async_trait;
use wallhub_core::wallpaper::{GenreRecord, WallpaperRecord};

use crate::catalog::Catalog;
use crate::error::DbError;
use crate::source::WallpaperSource;

/// Serves clones of a fixed [`Catalog`], optionally after a simulated delay.
#[derive(Debug, Clone)]
pub struct MockSource {
    catalog: Catalog,
    latency: Duration,
}

impl MockSource {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            latency: Duration::ZERO,
        }
    }

    /// Mock source over the bundled fixture catalog.
    pub fn builtin() -> Result<Self, DbError> {
        Ok(Self::new(Catalog::builtin()?))
    }

    /// Delay every fetch by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl WallpaperSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_wallpapers(&self) -> Result<Vec<WallpaperRecord>, DbError> {
        self.simulate_latency().await;
        tracing::debug!(count = self.catalog.wallpapers.len(), "Mock wallpapers fetched");
        Ok(self.catalog.wallpapers.clone())
    }

    async fn fetch_genres(&self) -> Result<Vec<GenreRecord>, DbError> {
        self.simulate_latency().await;
        tracing::debug!(count = self.catalog.genres.len(), "Mock genres fetched");
        Ok(self.catalog.genres.clone())
    }
}

//! JSON catalog documents: `{ "genres": [...], "wallpapers": [...] }`.

use std::collections::HashSet;

use serde::Deserialize;
use wallhub_core::wallpaper::{GenreRecord, WallpaperRecord};

use crate::error::DbError;

/// Catalog shipped with the crate and served by the mock source.
pub const BUILTIN_CATALOG: &str = include_str!("../fixtures/catalog.json");

/// A validated snapshot of every genre and wallpaper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub genres: Vec<GenreRecord>,
    #[serde(default)]
    pub wallpapers: Vec<WallpaperRecord>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, DbError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The bundled fixture catalog.
    pub fn builtin() -> Result<Self, DbError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Reject duplicate wallpaper ids and duplicate genre slugs.
    pub fn validate(&self) -> Result<(), DbError> {
        let mut ids = HashSet::with_capacity(self.wallpapers.len());
        for wallpaper in &self.wallpapers {
            if !ids.insert(wallpaper.id.as_str()) {
                return Err(DbError::DuplicateWallpaper(wallpaper.id.clone()));
            }
        }

        let mut slugs = HashSet::with_capacity(self.genres.len());
        for genre in &self.genres {
            if !slugs.insert(genre.slug.as_str()) {
                return Err(DbError::DuplicateGenre(genre.slug.clone()));
            }
        }

        Ok(())
    }
}

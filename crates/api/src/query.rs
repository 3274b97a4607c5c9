//! Query parameter types for API handlers.
//!
//! These mirror the gallery UI state (selected genre, typed search, chosen
//! sort) and convert into a [`FilterSpec`] for the query engine.

use serde::Deserialize;
use wallhub_core::query::{clamp_page_size, FilterSpec, SortOption, MAX_PAGE_SIZE};

/// Parameters for `GET /wallpapers` (`?genre=&search=&sort=&limit=&seed=`).
#[derive(Debug, Default, Deserialize)]
pub struct WallpaperListParams {
    pub genre: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub seed: Option<u64>,
}

impl WallpaperListParams {
    /// A blank `genre` means "all genres"; an unknown `sort` means "no sort".
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            genre: self
                .genre
                .as_deref()
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string),
            search: self.search.clone(),
            sort: parse_sort(self.sort.as_deref()),
            featured_only: false,
            random_seed: self.seed,
        }
    }

    pub fn page_size(&self, default: usize) -> usize {
        clamp_page_size(self.limit, default, MAX_PAGE_SIZE)
    }
}

/// Parameters for `GET /wallpapers/trending` (`?limit=&sort=&seed=`).
#[derive(Debug, Default, Deserialize)]
pub struct TrendingParams {
    pub limit: Option<i64>,
    pub sort: Option<String>,
    pub seed: Option<u64>,
}

impl TrendingParams {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            sort: parse_sort(self.sort.as_deref()),
            featured_only: true,
            random_seed: self.seed,
            ..FilterSpec::default()
        }
    }

    pub fn page_size(&self, default: usize) -> usize {
        clamp_page_size(self.limit, default, MAX_PAGE_SIZE)
    }
}

/// Generic page size parameter (`?limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

impl LimitParams {
    pub fn page_size(&self, default: usize) -> usize {
        clamp_page_size(self.limit, default, MAX_PAGE_SIZE)
    }
}

fn parse_sort(raw: Option<&str>) -> Option<SortOption> {
    let raw = raw?;
    let sort = SortOption::parse_permissive(raw);
    if sort.is_none() && !raw.trim().is_empty() {
        tracing::debug!(sort = raw, "Ignoring unknown sort option");
    }
    sort
}

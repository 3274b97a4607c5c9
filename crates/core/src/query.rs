//! Wallpaper query engine.
//!
//! [`query`] runs a fixed pipeline over an in-memory snapshot:
//!
//! 1. genre filter (exact slug membership)
//! 2. featured filter (trending surfaces only)
//! 3. free-text search
//! 4. sort (stable, descending by the chosen key; or a shuffle)
//! 5. page-size limit
//!
//! Every function here is pure. Results borrow from the input slice, so the
//! records themselves are never copied or modified.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::search;
use crate::wallpaper::WallpaperRecord;

// ---------------------------------------------------------------------------
// Page size defaults
// ---------------------------------------------------------------------------

/// Default page size for general listings.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default number of records on trending surfaces.
pub const DEFAULT_TRENDING_COUNT: usize = 4;

/// Maximum page size accepted from untrusted callers.
pub const MAX_PAGE_SIZE: usize = 100;

/// Clamp a caller-provided page size to `1..=max`, using `default` when absent.
pub fn clamp_page_size(requested: Option<i64>, default: usize, max: usize) -> usize {
    let max = max.max(1);
    match requested {
        None => default.clamp(1, max),
        Some(n) if n < 1 => 1,
        Some(n) => usize::try_from(n).map_or(max, |n| n.min(max)),
    }
}

// ---------------------------------------------------------------------------
// Sort option
// ---------------------------------------------------------------------------

/// Result ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Most viewed first.
    Trending,
    /// Most recently created first.
    Newest,
    /// Most liked first.
    Popular,
    /// Shuffled.
    Random,
}

/// All sort names, in declaration order.
pub const SORT_OPTION_NAMES: &[&str] = &["trending", "newest", "popular", "random"];

impl SortOption {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Trending => "trending",
            SortOption::Newest => "newest",
            SortOption::Popular => "popular",
            SortOption::Random => "random",
        }
    }

    /// Lenient parse: blank or unrecognized input means "no sort".
    pub fn parse_permissive(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trending" => Ok(SortOption::Trending),
            "newest" => Ok(SortOption::Newest),
            "popular" => Ok(SortOption::Popular),
            "random" => Ok(SortOption::Random),
            other => Err(CoreError::Validation(format!(
                "Unknown sort option: '{other}'. Valid options: {}",
                SORT_OPTION_NAMES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter spec
// ---------------------------------------------------------------------------

/// Caller-supplied criteria for one result view.
///
/// The presentation layer owns a single current value and replaces it
/// wholesale on each interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub genre: Option<String>,
    pub search: Option<String>,
    pub sort: Option<SortOption>,
    pub featured_only: bool,
    /// Seed for [`SortOption::Random`]; ignored by the other orderings.
    pub random_seed: Option<u64>,
}

impl FilterSpec {
    pub fn with_genre(mut self, slug: impl Into<String>) -> Self {
        self.genre = Some(slug.into());
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Filter, sort and truncate `records` according to `filter`.
///
/// Never fails: an empty input or a filter that matches nothing yields an
/// empty result. The output holds at most `page_size` records.
pub fn query<'a>(
    records: &'a [WallpaperRecord],
    filter: &FilterSpec,
    page_size: usize,
) -> Vec<&'a WallpaperRecord> {
    let term = filter.search.as_deref().and_then(search::normalize_term);

    let mut selected: Vec<&WallpaperRecord> = records
        .iter()
        .filter(|r| filter.genre.as_deref().map_or(true, |g| r.has_genre(g)))
        .filter(|r| !filter.featured_only || r.is_featured())
        .filter(|r| term.as_deref().map_or(true, |t| search::matches(r, t)))
        .collect();

    if let Some(sort) = filter.sort {
        apply_sort(&mut selected, sort, filter.random_seed);
    }

    selected.truncate(page_size);
    selected
}

/// Featured records in provider order, limited to `count`.
///
/// Selection only: pass a [`FilterSpec`] with a sort to [`query`] when the
/// featured set should also be ranked.
pub fn trending_slice(records: &[WallpaperRecord], count: usize) -> Vec<&WallpaperRecord> {
    query(records, &FilterSpec::default().with_featured_only(), count)
}

/// Records tagged with `slug` in provider order, limited to `count`.
pub fn by_genre<'a>(
    records: &'a [WallpaperRecord],
    slug: &str,
    count: usize,
) -> Vec<&'a WallpaperRecord> {
    query(records, &FilterSpec::default().with_genre(slug), count)
}

/// `sort_by_key` is stable, so equal keys keep their filtered order.
fn apply_sort(records: &mut [&WallpaperRecord], sort: SortOption, seed: Option<u64>) {
    match sort {
        SortOption::Trending => records.sort_by_key(|r| Reverse(r.views_or_zero())),
        SortOption::Newest => records.sort_by_key(|r| Reverse(r.created_at_or_zero())),
        SortOption::Popular => records.sort_by_key(|r| Reverse(r.likes_or_zero())),
        SortOption::Random => match seed {
            Some(seed) => records.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => records.shuffle(&mut rand::rng()),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

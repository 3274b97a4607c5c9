//! Free-text search matching.
//!
//! A search term matches a wallpaper when its lower-cased form is a substring
//! of the lower-cased title or of any lower-cased genre tag. The term is
//! matched as a whole; it is not split into words.

use crate::wallpaper::WallpaperRecord;

/// Normalize raw user input into a search term.
///
/// - Trims surrounding whitespace.
/// - Lower-cases the remainder.
///
/// Returns `None` for empty or whitespace-only input, which callers treat as
/// "no search filter".
///
/// # Examples
///
/// ```
/// use wallhub_core::search::normalize_term;
/// assert_eq!(normalize_term("  Neon "), Some("neon".to_string()));
/// assert_eq!(normalize_term("   "), None);
/// ```
pub fn normalize_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Check a record against an already-normalized term.
pub fn matches(record: &WallpaperRecord, term: &str) -> bool {
    record.title.to_lowercase().contains(term)
        || record
            .genre_tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Wallpaper and genre records as served by the data provider.
//!
//! Records are immutable snapshots: the query engine reorders borrowed views
//! of them and never rewrites a field.

use serde::{Deserialize, Serialize};

use crate::types::{RecordId, Timestamp};

/// Suggested filename for the browser-level download action.
pub const DOWNLOAD_FILENAME: &str = "wallpaper.jpg";

// ---------------------------------------------------------------------------
// Wallpaper
// ---------------------------------------------------------------------------

/// A single downloadable wallpaper.
///
/// The genre tag list is stored under the document field `genre`; `genreTags`
/// is accepted on input as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperRecord {
    pub id: RecordId,
    pub url: String,
    pub title: String,
    #[serde(rename = "genre", alias = "genreTags", default)]
    pub genre_tags: Vec<String>,
    #[serde(default)]
    pub source: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl WallpaperRecord {
    /// View count with a missing value treated as 0.
    pub fn views_or_zero(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    /// Like count with a missing value treated as 0.
    pub fn likes_or_zero(&self) -> u64 {
        self.likes.unwrap_or(0)
    }

    /// Creation timestamp with a missing value treated as 0.
    pub fn created_at_or_zero(&self) -> Timestamp {
        self.created_at.unwrap_or(0)
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Exact, case-sensitive slug membership.
    pub fn has_genre(&self, slug: &str) -> bool {
        self.genre_tags.iter().any(|tag| tag == slug)
    }
}

/// Resolve the location the download action should fetch.
///
/// Returns `download_url` when it is present and not blank, otherwise the
/// display `url`.
pub fn resolve_download_target(record: &WallpaperRecord) -> &str {
    match record.download_url.as_deref() {
        Some(alt) if !alt.trim().is_empty() => alt,
        _ => &record.url,
    }
}

/// What a client needs to trigger a browser download: where to fetch the
/// image and the filename to save it under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DownloadLink<'a> {
    pub url: &'a str,
    pub filename: &'static str,
}

/// Download target for `record`, saved as [`DOWNLOAD_FILENAME`].
pub fn download_link(record: &WallpaperRecord) -> DownloadLink<'_> {
    DownloadLink {
        url: resolve_download_target(record),
        filename: DOWNLOAD_FILENAME,
    }
}

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// A navigable genre. `slug` is the filter key matched against
/// [`WallpaperRecord::genre_tags`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreRecord {
    pub id: RecordId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal record used across the crate's unit tests.
    pub(crate) fn record(id: &str, title: &str, tags: &[&str]) -> WallpaperRecord {
        WallpaperRecord {
            id: id.to_string(),
            url: format!("https://images.example.com/{id}.jpg"),
            title: title.to_string(),
            genre_tags: tags.iter().map(|t| t.to_string()).collect(),
            source: "Unsplash".to_string(),
            width: 1920,
            height: 1080,
            download_url: None,
            views: None,
            likes: None,
            featured: None,
            created_at: None,
        }
    }

    // -- resolve_download_target ---------------------------------------------

    #[test]
    fn download_falls_back_to_url_when_absent() {
        let mut r = record("1", "Neon City", &[]);
        r.url = "A".to_string();
        assert_eq!(resolve_download_target(&r), "A");
    }

    #[test]
    fn download_prefers_download_url() {
        let mut r = record("1", "Neon City", &[]);
        r.url = "A".to_string();
        r.download_url = Some("B".to_string());
        assert_eq!(resolve_download_target(&r), "B");
    }

    #[test]
    fn download_ignores_blank_download_url() {
        let mut r = record("1", "Neon City", &[]);
        r.url = "A".to_string();
        r.download_url = Some("   ".to_string());
        assert_eq!(resolve_download_target(&r), "A");
    }

    #[test]
    fn download_link_uses_fixed_filename() {
        let mut r = record("1", "Neon City", &[]);
        r.download_url = Some("B".to_string());

        let link = download_link(&r);
        assert_eq!(link.url, "B");
        assert_eq!(link.filename, "wallpaper.jpg");
    }

    // -- defaults --------------------------------------------------------------

    #[test]
    fn missing_counters_read_as_zero() {
        let r = record("1", "Neon City", &[]);
        assert_eq!(r.views_or_zero(), 0);
        assert_eq!(r.likes_or_zero(), 0);
        assert_eq!(r.created_at_or_zero(), 0);
        assert!(!r.is_featured());
    }

    #[test]
    fn genre_membership_is_case_sensitive() {
        let r = record("1", "Neon City", &["cyberpunk"]);
        assert!(r.has_genre("cyberpunk"));
        assert!(!r.has_genre("Cyberpunk"));
        assert!(!r.has_genre("cyber"));
    }

    // -- serde -----------------------------------------------------------------

    #[test]
    fn deserializes_document_shape() {
        let json = r#"{
            "id": "w1",
            "url": "https://images.example.com/w1.jpg",
            "title": "Forest Dawn",
            "genre": ["nature", "landscape"],
            "source": "Unsplash",
            "width": 3840,
            "height": 2160,
            "downloadUrl": "https://images.example.com/w1-full.jpg",
            "likes": 20,
            "createdAt": 10
        }"#;
        let r: WallpaperRecord = serde_json::from_str(json).expect("valid record");

        assert_eq!(r.genre_tags, vec!["nature", "landscape"]);
        assert_eq!(
            r.download_url.as_deref(),
            Some("https://images.example.com/w1-full.jpg")
        );
        assert_eq!(r.views, None);
        assert_eq!(r.likes, Some(20));
        assert_eq!(r.created_at, Some(10));
        assert_eq!(r.featured, None);
    }

    #[test]
    fn accepts_genre_tags_alias() {
        let json = r#"{"id":"w1","url":"u","title":"t","genreTags":["space"],"width":1,"height":1}"#;
        let r: WallpaperRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(r.genre_tags, vec!["space"]);
        assert_eq!(r.source, "");
    }

    #[test]
    fn serialization_omits_absent_optionals() {
        let r = record("1", "Neon City", &["cyberpunk"]);
        let value = serde_json::to_value(&r).expect("serializable");

        assert_eq!(value["genre"][0], "cyberpunk");
        assert!(value.get("downloadUrl").is_none());
        assert!(value.get("views").is_none());
        assert!(value.get("createdAt").is_none());
    }
}

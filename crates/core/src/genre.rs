//! Genre navigation helpers.

use std::collections::BTreeMap;

use crate::wallpaper::{GenreRecord, WallpaperRecord};

/// Heading shown when no genre (or an unknown one) is active.
pub const ALL_WALLPAPERS_HEADING: &str = "All Wallpapers";

/// Look up a genre by its slug.
pub fn find_by_slug<'a>(genres: &'a [GenreRecord], slug: &str) -> Option<&'a GenreRecord> {
    genres.iter().find(|g| g.slug == slug)
}

/// Display heading for the active genre selection.
pub fn heading<'a>(genres: &'a [GenreRecord], active: Option<&str>) -> &'a str {
    active
        .and_then(|slug| find_by_slug(genres, slug))
        .map_or(ALL_WALLPAPERS_HEADING, |g| g.name.as_str())
}

/// Number of records carrying each tag. A record counts once per distinct tag.
pub fn count_by_genre(records: &[WallpaperRecord]) -> BTreeMap<&str, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        let mut seen: Vec<&str> = Vec::with_capacity(record.genre_tags.len());
        for tag in &record.genre_tags {
            if seen.contains(&tag.as_str()) {
                continue;
            }
            seen.push(tag);
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    counts
}

/// Copy `genres` with `count` recomputed from `records`.
pub fn with_counts(genres: &[GenreRecord], records: &[WallpaperRecord]) -> Vec<GenreRecord> {
    let counts = count_by_genre(records);
    genres
        .iter()
        .map(|g| GenreRecord {
            count: Some(counts.get(g.slug.as_str()).copied().unwrap_or(0)),
            ..g.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallpaper::tests::record;

    fn genre(slug: &str, name: &str) -> GenreRecord {
        GenreRecord {
            id: format!("g-{slug}"),
            name: name.to_string(),
            slug: slug.to_string(),
            count: None,
        }
    }

    fn genres() -> Vec<GenreRecord> {
        vec![
            genre("nature", "Nature"),
            genre("space", "Space"),
            genre("minimal", "Minimal"),
        ]
    }

    #[test]
    fn find_by_slug_matches_exactly() {
        let all = genres();
        assert_eq!(find_by_slug(&all, "space").map(|g| g.name.as_str()), Some("Space"));
        assert!(find_by_slug(&all, "Space").is_none());
    }

    #[test]
    fn heading_uses_genre_name() {
        assert_eq!(heading(&genres(), Some("nature")), "Nature");
    }

    #[test]
    fn heading_falls_back_for_none_or_unknown() {
        let all = genres();
        assert_eq!(heading(&all, None), ALL_WALLPAPERS_HEADING);
        assert_eq!(heading(&all, Some("vaporwave")), ALL_WALLPAPERS_HEADING);
    }

    #[test]
    fn counts_each_tag_once_per_record() {
        let records = vec![
            record("1", "Aurora", &["nature", "space", "nature"]),
            record("2", "Lake", &["nature"]),
            record("3", "Blank", &[]),
        ];
        let counts = count_by_genre(&records);
        assert_eq!(counts.get("nature"), Some(&2));
        assert_eq!(counts.get("space"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn with_counts_fills_zero_for_unused_genres() {
        let mut all = genres();
        all[2].count = Some(99);
        let records = vec![record("1", "Aurora", &["nature", "space"])];

        let counted = with_counts(&all, &records);

        let counts: Vec<Option<u64>> = counted.iter().map(|g| g.count).collect();
        assert_eq!(counts, [Some(1), Some(1), Some(0)]);
        assert_eq!(counted[0].name, "Nature");
    }
}

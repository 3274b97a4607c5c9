use std::path::PathBuf;

/// Failures raised by wallpaper data sources.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate wallpaper id: {0}")]
    DuplicateWallpaper(String),

    #[error("Duplicate genre slug: {0}")]
    DuplicateGenre(String),
}

//! Wallpaper data providers.
//!
//! Everything here hands complete snapshots to callers; filtering and
//! ordering happen in `wallhub_core::query`.

pub mod catalog;
pub mod error;
pub mod file;
pub mod mock;
pub mod source;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub use catalog::Catalog;
pub use error::DbError;
pub use file::FileSource;
pub use mock::MockSource;
pub use source::WallpaperSource;

/// Shared handle to whichever source the server was configured with.
pub type DynSource = Arc<dyn WallpaperSource>;

/// Which source to build, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Bundled fixture catalog with an optional simulated delay.
    Mock { latency: Duration },
    /// JSON catalog document on disk.
    File { path: PathBuf },
}

/// Build a source from configuration.
///
/// File sources are loaded once up front so a missing or invalid catalog
/// fails at startup rather than on the first request.
pub async fn create_source(config: &SourceConfig) -> Result<DynSource, DbError> {
    match config {
        SourceConfig::Mock { latency } => {
            let source = MockSource::builtin()?.with_latency(*latency);
            Ok(Arc::new(source))
        }
        SourceConfig::File { path } => {
            let source = FileSource::new(path.clone());
            source.load().await?;
            Ok(Arc::new(source))
        }
    }
}

/// Verify the source can currently serve a snapshot.
pub async fn health_check(source: &dyn WallpaperSource) -> Result<(), DbError> {
    source.fetch_genres().await.map(|_| ())
}

use wallhub_db::DynSource;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the source sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Provider of wallpaper and genre snapshots.
    pub source: DynSource,
}

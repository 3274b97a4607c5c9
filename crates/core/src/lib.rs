//! Wallhub domain core.
//!
//! Wallpaper and genre records, the filter/sort/limit query engine, genre
//! helpers and download resolution. This crate performs no I/O; data
//! providers and the HTTP surface live in `wallhub-db` and `wallhub-api`.

pub mod error;
pub mod genre;
pub mod query;
pub mod search;
pub mod types;
pub mod wallpaper;

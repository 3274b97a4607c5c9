/// Wallpaper and genre identifiers are opaque document keys.
pub type RecordId = String;

/// Creation timestamps are epoch-style ordering keys (larger is newer).
pub type Timestamp = i64;

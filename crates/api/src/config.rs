use std::path::PathBuf;
use std::time::Duration;

use wallhub_db::SourceConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Where wallpapers come from.
    pub source: SourceConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `WALLPAPER_SOURCE`     | `mock`                     |
    /// | `WALLPAPER_FILE`       | required when source=file  |
    /// | `MOCK_LATENCY_MS`      | `0`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let source = parse_source_config(
            &std::env::var("WALLPAPER_SOURCE").unwrap_or_else(|_| "mock".into()),
            std::env::var("WALLPAPER_FILE").ok().as_deref(),
            std::env::var("MOCK_LATENCY_MS").ok().as_deref(),
        )
        .unwrap_or_else(|e| panic!("Invalid wallpaper source configuration: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            source,
        }
    }
}

/// Log output format, selected by `LOG_FORMAT` (`pretty` or `json`).
///
/// Read before [`ServerConfig::from_env`] because tracing is installed first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Load from `LOG_FORMAT`, defaulting to [`LogFormat::Pretty`].
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .ok()
            .map(|raw| parse_log_format(&raw).unwrap_or_else(|e| panic!("{e}")))
            .unwrap_or_default()
    }
}

/// Interpret a `LOG_FORMAT` value. Blank means the default.
pub fn parse_log_format(raw: &str) -> Result<LogFormat, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(format!(
            "Unknown LOG_FORMAT '{other}'. Valid formats: pretty, json"
        )),
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Interpret the source-related settings.
///
/// Returns a human-readable message for unknown kinds, a `file` source
/// without a path, or a latency that is not a whole number of milliseconds.
pub fn parse_source_config(
    kind: &str,
    file: Option<&str>,
    latency_ms: Option<&str>,
) -> Result<SourceConfig, String> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "mock" => {
            let latency_ms: u64 = match latency_ms.map(str::trim) {
                None | Some("") => 0,
                Some(raw) => raw
                    .parse()
                    .map_err(|_| format!("MOCK_LATENCY_MS must be a valid u64, got '{raw}'"))?,
            };
            Ok(SourceConfig::Mock {
                latency: Duration::from_millis(latency_ms),
            })
        }
        "file" => match file.map(str::trim) {
            Some(path) if !path.is_empty() => Ok(SourceConfig::File {
                path: PathBuf::from(path),
            }),
            _ => Err("WALLPAPER_FILE must be set when WALLPAPER_SOURCE=file".to_string()),
        },
        other => Err(format!(
            "Unknown WALLPAPER_SOURCE '{other}'. Valid sources: mock, file"
        )),
    }
}

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Process-level settings read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Finance document used when `--file` is not given.
    pub config_file: Option<PathBuf>,
    pub http_timeout: Duration,
    pub log_format: LogFormat,
}

impl AppSettings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let config_file = lookup("FIN_STATS_CONFIG")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let timeout_ms: u64 = lookup("FIN_STATS_HTTP_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_MS);
        let log_format = match lookup("FIN_STATS_LOG_FORMAT") {
            Some(s) if s.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            config_file,
            http_timeout: Duration::from_millis(timeout_ms),
            log_format,
        }
    }
}

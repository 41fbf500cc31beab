// src/config.rs
//! Env-driven settings for the service binary. The CLI front end ignores
//! most of these on purpose: it owns its own (absent) default timeout.

pub const ENV_HOST: &str = "NEWS_SEARCH_HOST";
pub const ENV_PORT: &str = "NEWS_SEARCH_PORT";
pub const ENV_MOCK_MODE: &str = "NEWS_SEARCH_MOCK_MODE";
pub const ENV_DEFAULT_TIMEOUT_SECS: &str = "NEWS_SEARCH_DEFAULT_TIMEOUT_SECS";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
/// Service-side default applied when the caller supplies no timeout.
pub const DEFAULT_SERVICE_TIMEOUT_SECS: f64 = 25.0;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Start with the mock provider active (can still be toggled at runtime).
    pub mock_mode: bool,
    pub default_timeout_secs: f64,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_or(std::env::var(ENV_PORT).ok(), DEFAULT_PORT),
            mock_mode: parse_flag(std::env::var(ENV_MOCK_MODE).ok()),
            default_timeout_secs: parse_or(
                std::env::var(ENV_DEFAULT_TIMEOUT_SECS).ok(),
                DEFAULT_SERVICE_TIMEOUT_SECS,
            ),
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

fn parse_flag(raw: Option<String>) -> bool {
    matches!(
        raw.as_deref().map(str::trim),
        Some("1") | Some("true") | Some("yes")
    )
}

//! # Application configuration: `daily-report.toml`
//!
//! Selects the backend the client talks to and tunes the in-memory mock
//! (filename: [`AppConfig::filename`] = `"daily-report.toml"`). The web binary
//! embeds the file at build time; two environment variables read at build time
//! take precedence over it.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! mode = "mock"                        # "mock" or "http"
//! base_url = "http://localhost:8080"   # used in http mode
//!
//! [mock]
//! latency_ms = 300                     # simulated network delay
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config. TOML (de)serialisation, env overrides, canonical filename. |
//! | [`ApiConfig`] | Backend selection: [`ApiMode`] and the REST base URL. |
//! | [`MockConfig`] | Mock backend tuning, `latency_ms` defaulting to **300**. |
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `DAILY_REPORT_API_MODE` | `api.mode` |
//! | `DAILY_REPORT_API_URL` | `api.base_url` |
//!
//! Every struct derives `Default`, so a missing or empty file is the default
//! configuration: mock backend, 300ms latency.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown api mode '{0}' (expected 'mock' or 'http')")]
    UnknownMode(String),
}

/// Which backend implementation serves API calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    #[default]
    Mock,
    Http,
}

impl FromStr for ApiMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(ApiMode::Mock),
            "http" | "real" => Ok(ApiMode::Http),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiMode::Mock => f.write_str("mock"),
            ApiMode::Http => f.write_str("http"),
        }
    }
}

/// Top-level configuration stored in `daily-report.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub mock: MockConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub mode: ApiMode,
    /// Origin of the REST backend, without the `/api` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mode: ApiMode::default(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockConfig {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    300
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "daily-report.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply `mode` and `base_url` overrides. Empty values are ignored.
    pub fn apply_overrides(
        mut self,
        mode: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(mode) = mode.filter(|m| !m.trim().is_empty()) {
            self.api.mode = mode.parse()?;
        }
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        Ok(self)
    }

    /// Parse `toml` (if any), then apply the build-time environment overrides.
    pub fn load(toml: Option<&str>) -> Result<Self, ConfigError> {
        let base = match toml {
            Some(s) => Self::from_toml(s)?,
            None => Self::default(),
        };
        let config = base.apply_overrides(
            option_env!("DAILY_REPORT_API_MODE"),
            option_env!("DAILY_REPORT_API_URL"),
        )?;
        tracing::debug!("Loaded config: mode={} base_url={}", config.api.mode, config.api.base_url);
        Ok(config)
    }

    /// `base_url` without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.mode, ApiMode::Mock);
        assert_eq!(config.mock.latency_ms, 300);
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = AppConfig::from_toml("[api]\nmode = \"http\"\n").unwrap();
        assert_eq!(config.api.mode, ApiMode::Http);
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.mock.latency_ms, 300);
    }

    #[test]
    fn toml_round_trip() {
        let mut config = AppConfig::default();
        config.api.mode = ApiMode::Http;
        config.mock.latency_ms = 0;
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn rejects_unknown_mode_in_file() {
        assert!(matches!(
            AppConfig::from_toml("[api]\nmode = \"grpc\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn overrides_win_over_file() {
        let config = AppConfig::default()
            .apply_overrides(Some("real"), Some("https://reports.example.com/"))
            .unwrap();
        assert_eq!(config.api.mode, ApiMode::Http);
        assert_eq!(config.base_url(), "https://reports.example.com");

        let unchanged = AppConfig::default().apply_overrides(Some(""), None).unwrap();
        assert_eq!(unchanged, AppConfig::default());

        assert!(matches!(
            AppConfig::default().apply_overrides(Some("grpc"), None),
            Err(ConfigError::UnknownMode(mode)) if mode == "grpc"
        ));
    }
}

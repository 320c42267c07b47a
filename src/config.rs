//! Configuration for the API client, the driver search and presentation helpers
//!
//! Defaults match the public f1api.dev deployment. Configuration can be loaded
//! from YAML and then adjusted through `PADDOCK_*` environment variables:
//!
//! ```rust
//! use paddock::PaddockConfig;
//!
//! let yaml = "search:\n  debounce_ms: 150\n";
//! let config = PaddockConfig::from_yaml_str(yaml).unwrap();
//! assert_eq!(config.search.debounce_ms, 150);
//! assert_eq!(config.search.min_query_len, 3);
//! assert_eq!(config.api.base_url, "https://f1api.dev/api");
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::{PaddockError, Result};

/// Environment variable overriding [`ApiConfig::base_url`]
pub const ENV_BASE_URL: &str = "PADDOCK_API_BASE_URL";
/// Environment variable overriding [`SearchConfig::debounce_ms`]
pub const ENV_DEBOUNCE_MS: &str = "PADDOCK_DEBOUNCE_MS";
/// Environment variable overriding [`SearchConfig::min_query_len`]
pub const ENV_MIN_QUERY_LEN: &str = "PADDOCK_MIN_QUERY_LEN";

/// Top-level configuration
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaddockConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub display: DisplayConfig,
}

/// REST API location and endpoint paths
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    pub endpoints: Endpoints,
    /// Per-request timeout. Unset means requests wait indefinitely.
    pub request_timeout_ms: Option<u64>,
}

/// Endpoint path segments, relative to the base URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Endpoints {
    pub teams: String,
    pub current_teams: String,
    pub drivers: String,
    pub drivers_search: String,
    pub drivers_championship: String,
    pub constructors_championship: String,
}

/// Driver search tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a changed input triggers a fetch
    pub debounce_ms: u64,
    /// Queries shorter than this (in characters, after trimming) never fetch
    pub min_query_len: usize,
}

/// Presentation defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Bars in the drivers' points chart
    pub top_drivers: usize,
    /// Bars in the constructors' points chart
    pub top_constructors: usize,
    /// Number of seasons offered by year selectors
    pub years_range: usize,
    /// Driver ids hidden from team line-ups (reserve or test drivers)
    pub excluded_driver_ids: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://f1api.dev/api".to_string(),
            endpoints: Endpoints::default(),
            request_timeout_ms: None,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            teams: "teams".to_string(),
            current_teams: "current/teams".to_string(),
            drivers: "drivers".to_string(),
            drivers_search: "drivers/search".to_string(),
            drivers_championship: "drivers-championship".to_string(),
            constructors_championship: "constructors-championship".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300, min_query_len: 3 }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { top_drivers: 10, top_constructors: 10, years_range: 75, excluded_driver_ids: vec![] }
    }
}

impl ApiConfig {
    /// Request timeout as a [`Duration`], if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

impl SearchConfig {
    /// Debounce interval as a [`Duration`]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl PaddockConfig {
    /// Parse and validate configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let yaml = std::fs::read_to_string(path)
            .map_err(|source| PaddockError::ConfigFile { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&yaml)
    }

    /// Apply `PADDOCK_*` environment overrides
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment, CLI flags, tests)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.api.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_DEBOUNCE_MS) {
            self.search.debounce_ms = raw.trim().parse().map_err(|_| {
                PaddockError::config(format!("{ENV_DEBOUNCE_MS} must be an integer, got '{raw}'"))
            })?;
        }
        if let Some(raw) = lookup(ENV_MIN_QUERY_LEN) {
            self.search.min_query_len = raw.trim().parse().map_err(|_| {
                PaddockError::config(format!("{ENV_MIN_QUERY_LEN} must be an integer, got '{raw}'"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check invariants the rest of the crate relies on
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(PaddockError::config("api.base_url must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(PaddockError::config(format!(
                "api.base_url must be an http(s) URL, got '{base_url}'"
            )));
        }
        Ok(())
    }
}

//! Feed configuration
//!
//! Everything a feed needs to know about the remote endpoint and its paging
//! behaviour. Loadable from YAML or JSON; every field has a default so an
//! empty file is a valid config.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Public API that serves combination records
pub const DEFAULT_BASE_URL: &str = "https://jellybellywikiapi.onrender.com";

/// Path of the combinations listing relative to the base URL
pub const DEFAULT_ENDPOINT: &str = "/api/combinations";

/// Records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Total count assumed before the first response arrives
pub const DEFAULT_INITIAL_TOTAL_COUNT: u64 = 10;

/// Fraction of the marker that must be on screen to trigger a load
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 1.0;

// ============================================================================
// Feed Config
// ============================================================================

/// Complete feed configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Listing path appended to the base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Records per page, sent as `pageSize`
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Placeholder total count used until the server reports one
    #[serde(default = "default_initial_total_count")]
    pub initial_total_count: u64,

    /// Sentinel visibility ratio in (0, 1]
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_initial_total_count() -> u64 {
    DEFAULT_INITIAL_TOTAL_COUNT
}

fn default_visibility_threshold() -> f64 {
    DEFAULT_VISIBILITY_THRESHOLD
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("combination-feed/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            page_size: default_page_size(),
            initial_total_count: default_initial_total_count(),
            visibility_threshold: default_visibility_threshold(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl FeedConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the endpoint path
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the placeholder total count
    #[must_use]
    pub fn with_initial_total_count(mut self, total: u64) -> Self {
        self.initial_total_count = total;
        self
    }

    /// Set the sentinel visibility threshold
    #[must_use]
    pub fn with_visibility_threshold(mut self, threshold: f64) -> Self {
        self.visibility_threshold = threshold;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse config from a YAML (or JSON, which is valid YAML) string
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file. `.json` files go through serde_json,
    /// everything else through serde_yaml.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let config: Self = serde_json::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check values that serde alone cannot
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;

        if self.page_size == 0 {
            return Err(Error::invalid_value(
                "page_size",
                "must be greater than zero",
            ));
        }

        if !(self.visibility_threshold > 0.0 && self.visibility_threshold <= 1.0) {
            return Err(Error::invalid_value(
                "visibility_threshold",
                format!("must be in (0, 1], got {}", self.visibility_threshold),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_feed_config_default() {
        let config = FeedConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.endpoint, "/api/combinations");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.initial_total_count, 10);
        assert!((config.visibility_threshold - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("combination-feed/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_feed_config_builder() {
        let config = FeedConfig::new()
            .with_base_url("http://localhost:8080")
            .with_endpoint("/v2/combos")
            .with_page_size(25)
            .with_initial_total_count(50)
            .with_visibility_threshold(0.5)
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.endpoint, "/v2/combos");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.initial_total_count, 50);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_feed_config_partial_yaml() {
        let config = FeedConfig::from_yaml_str("page_size: 20\n").unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_feed_config_empty_yaml() {
        let config = FeedConfig::from_yaml_str("  \n").unwrap();
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn test_feed_config_rejects_zero_page_size() {
        let err = FeedConfig::from_yaml_str("page_size: 0\n").unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_feed_config_rejects_bad_threshold() {
        let config = FeedConfig::new().with_visibility_threshold(1.5);
        assert!(config.validate().is_err());

        let config = FeedConfig::new().with_visibility_threshold(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_feed_config_rejects_bad_url() {
        let config = FeedConfig::new().with_base_url("not a url");
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_feed_config_from_yaml_file() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(file, "base_url: http://127.0.0.1:9000").unwrap();
        writeln!(file, "page_size: 5").unwrap();

        let config = FeedConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn test_feed_config_from_json_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{"page_size": 15, "timeout_secs": 3}}"#).unwrap();

        let config = FeedConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 15);
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_feed_config_missing_file() {
        let err = FeedConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_feed_config_yaml_roundtrip() {
        let config = FeedConfig::new().with_page_size(7);
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("page_size: 7"));
        assert_eq!(FeedConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}

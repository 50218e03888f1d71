//! Tunable knobs for the theme source client and the style cache.
//!
//! Both structs deserialize from partially filled configuration sections: every
//! field is optional and the accessors fall back to the documented defaults.
//! The `with_*` builders take precise [`Duration`]s and win over the
//! whole-unit values read from configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public Bootswatch catalog endpoint.
pub const DEFAULT_API_URL: &str = "https://bootswatch.com/api/5.json";
/// Path prefix under which the static file middleware serves bundled assets.
pub const DEFAULT_STATIC_BASE_PATH: &str = "/_content/swatch";
pub const DEFAULT_CACHE_DURATION_MINUTES: u64 = 20;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ALL_STYLES_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_STYLE_LOOKUP_TIMEOUT_SECS: u64 = 1;

/// Configuration of the remote theme catalog client.
///
/// # Examples
///
/// ```no_run
/// use server::config::ThemeSourceConfig;
/// use std::time::Duration;
///
/// let config = ThemeSourceConfig::default()
///     .with_api_url("http://127.0.0.1:8080/api/5.json")
///     .with_cache_duration(Duration::from_secs(60));
/// assert_eq!(config.cache_duration(), Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeSourceConfig {
    /// Catalog endpoint (default: Bootswatch API v5)
    api_url: Option<String>,
    /// Prefix of the locally served built-in theme assets (default: `/_content/swatch`)
    static_base_path: Option<String>,
    /// How long a successful catalog response is reused, in minutes (default: 20)
    cache_duration_minutes: Option<u64>,
    /// Whole request timeout in seconds (default: 30)
    request_timeout_secs: Option<u64>,
    /// Connection establishment timeout in seconds (default: 10)
    connect_timeout_secs: Option<u64>,
    /// User agent sent to the catalog (default: crate name and version)
    user_agent: Option<String>,

    #[serde(skip)]
    cache_duration_override: Option<Duration>,
    #[serde(skip)]
    request_timeout_override: Option<Duration>,
}

impl ThemeSourceConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_static_base_path(mut self, path: impl Into<String>) -> Self {
        self.static_base_path = Some(path.into());
        self
    }

    /// A zero duration disables response caching.
    pub fn with_cache_duration(mut self, duration: Duration) -> Self {
        self.cache_duration_override = Some(duration);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_override = Some(timeout);
        self
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Base path without a trailing slash.
    pub fn static_base_path(&self) -> &str {
        self.static_base_path
            .as_deref()
            .unwrap_or(DEFAULT_STATIC_BASE_PATH)
            .trim_end_matches('/')
    }

    pub fn cache_duration_minutes(&self) -> u64 {
        self.cache_duration_minutes
            .unwrap_or(DEFAULT_CACHE_DURATION_MINUTES)
    }

    /// Saturates at `u64::MAX` seconds for absurdly large minute counts.
    pub fn cache_duration(&self) -> Duration {
        self.cache_duration_override.unwrap_or_else(|| {
            Duration::from_secs(self.cache_duration_minutes().saturating_mul(60))
        })
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_override
            .unwrap_or_else(|| Duration::from_secs(self.request_timeout_secs()))
    }

    pub fn connect_timeout_secs(&self) -> u64 {
        self.connect_timeout_secs
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs())
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
    }
}

/// Read timeouts of the style cache.
///
/// Readers that arrive while the catalog is still being populated wait at most
/// this long before answering with whatever is available.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StyleCacheConfig {
    /// Wait bound of a full-list read, in seconds (default: 3)
    all_styles_timeout_secs: Option<u64>,
    /// Wait bound of a point lookup, in seconds (default: 1)
    style_lookup_timeout_secs: Option<u64>,

    #[serde(skip)]
    all_styles_timeout_override: Option<Duration>,
    #[serde(skip)]
    style_lookup_timeout_override: Option<Duration>,
}

impl StyleCacheConfig {
    /// Creates a configuration with explicit wait bounds.
    pub fn new(all_styles_timeout: Duration, style_lookup_timeout: Duration) -> Self {
        Self {
            all_styles_timeout_override: Some(all_styles_timeout),
            style_lookup_timeout_override: Some(style_lookup_timeout),
            ..Self::default()
        }
    }

    pub fn all_styles_timeout_secs(&self) -> u64 {
        self.all_styles_timeout_secs
            .unwrap_or(DEFAULT_ALL_STYLES_TIMEOUT_SECS)
    }

    pub fn style_lookup_timeout_secs(&self) -> u64 {
        self.style_lookup_timeout_secs
            .unwrap_or(DEFAULT_STYLE_LOOKUP_TIMEOUT_SECS)
    }

    pub fn all_styles_timeout(&self) -> Duration {
        self.all_styles_timeout_override
            .unwrap_or_else(|| Duration::from_secs(self.all_styles_timeout_secs()))
    }

    pub fn style_lookup_timeout(&self) -> Duration {
        self.style_lookup_timeout_override
            .unwrap_or_else(|| Duration::from_secs(self.style_lookup_timeout_secs()))
    }
}

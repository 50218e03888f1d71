use super::{
    LoggingConfig, limits::*, switcher::SwitcherConfig, validation::ConfigValidationError,
};
use serde::{Deserialize, Serialize};
use server::config::{StyleCacheConfig, ThemeSourceConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    themes: ThemeSourceConfig,
    #[serde(default)]
    cache: StyleCacheConfig,
    #[serde(default)]
    switcher: SwitcherConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let api_url = self.themes.api_url();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            errors.push(ConfigValidationError::ApiUrl {
                configured: api_url.to_string(),
            });
        }

        if self.themes.cache_duration_minutes() > MAX_CACHE_DURATION_MINUTES {
            errors.push(ConfigValidationError::CacheDuration {
                configured: self.themes.cache_duration_minutes(),
                limit: MAX_CACHE_DURATION_MINUTES,
            });
        }

        let request_timeout = self.themes.request_timeout_secs();
        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS).contains(&request_timeout) {
            errors.push(ConfigValidationError::RequestTimeout {
                configured: request_timeout,
                min_limit: MIN_REQUEST_TIMEOUT_SECS,
                max_limit: MAX_REQUEST_TIMEOUT_SECS,
            });
        }

        let read_timeouts = [
            ("all_styles_timeout_secs", self.cache.all_styles_timeout_secs()),
            ("style_lookup_timeout_secs", self.cache.style_lookup_timeout_secs()),
        ];
        for (field, configured) in read_timeouts {
            if !(MIN_READ_TIMEOUT_SECS..=MAX_READ_TIMEOUT_SECS).contains(&configured) {
                errors.push(ConfigValidationError::ReadTimeout {
                    field,
                    configured,
                    min_limit: MIN_READ_TIMEOUT_SECS,
                    max_limit: MAX_READ_TIMEOUT_SECS,
                });
            }
        }

        let color_mode = self.switcher.default_color_mode();
        if !SUPPORTED_COLOR_MODES.contains(&color_mode) {
            errors.push(ConfigValidationError::ColorMode {
                configured: color_mode.to_string(),
            });
        }

        if self.switcher.cookie_namespace().trim().is_empty() {
            errors.push(ConfigValidationError::CookieNamespace);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    // Configuration section accessors
    pub fn themes(&self) -> &ThemeSourceConfig {
        &self.themes
    }

    pub fn cache(&self) -> &StyleCacheConfig {
        &self.cache
    }

    pub fn switcher(&self) -> &SwitcherConfig {
        &self.switcher
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Fully resolved configuration, defaults filled in
#[derive(Debug, Serialize)]
pub struct EffectiveConfig<'a> {
    themes: EffectiveThemes<'a>,
    cache: EffectiveCache,
    switcher: EffectiveSwitcher<'a>,
    logging: EffectiveLogging<'a>,
}

#[derive(Debug, Serialize)]
struct EffectiveThemes<'a> {
    api_url: &'a str,
    static_base_path: &'a str,
    cache_duration_minutes: u64,
    request_timeout_secs: u64,
    connect_timeout_secs: u64,
    user_agent: &'a str,
}

#[derive(Debug, Serialize)]
struct EffectiveCache {
    all_styles_timeout_secs: u64,
    style_lookup_timeout_secs: u64,
}

#[derive(Debug, Serialize)]
struct EffectiveSwitcher<'a> {
    cookie_namespace: &'a str,
    default_theme: &'a str,
    default_color_mode: &'a str,
    default_stylesheet_url: &'a str,
}

#[derive(Debug, Serialize)]
struct EffectiveLogging<'a> {
    level: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
}

impl AppConfig {
    pub fn effective(&self) -> EffectiveConfig<'_> {
        EffectiveConfig {
            themes: EffectiveThemes {
                api_url: self.themes.api_url(),
                static_base_path: self.themes.static_base_path(),
                cache_duration_minutes: self.themes.cache_duration_minutes(),
                request_timeout_secs: self.themes.request_timeout_secs(),
                connect_timeout_secs: self.themes.connect_timeout_secs(),
                user_agent: self.themes.user_agent(),
            },
            cache: EffectiveCache {
                all_styles_timeout_secs: self.cache.all_styles_timeout_secs(),
                style_lookup_timeout_secs: self.cache.style_lookup_timeout_secs(),
            },
            switcher: EffectiveSwitcher {
                cookie_namespace: self.switcher.cookie_namespace(),
                default_theme: self.switcher.default_theme(),
                default_color_mode: self.switcher.default_color_mode(),
                default_stylesheet_url: self.switcher.default_stylesheet_url(),
            },
            logging: EffectiveLogging {
                level: self.logging.level(),
                file: self.logging.file(),
            },
        }
    }
}

impl EffectiveConfig<'_> {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

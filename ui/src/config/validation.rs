use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid themes.api_url: {configured}")]
    ApiUrl { configured: String },
    #[error("Invalid themes.cache_duration_minutes: {configured} (limit: {limit})")]
    CacheDuration { configured: u64, limit: u64 },
    #[error(
        "Invalid themes.request_timeout_secs: {configured} (min: {min_limit}, max: {max_limit})"
    )]
    RequestTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid cache.{field}: {configured} (min: {min_limit}, max: {max_limit})")]
    ReadTimeout {
        field: &'static str,
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid switcher.default_color_mode: {configured}")]
    ColorMode { configured: String },
    #[error("Invalid switcher.cookie_namespace: must not be empty")]
    CookieNamespace,
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::ApiUrl { configured } => {
                format!(
                    "Theme catalog URL is not an HTTP address!\n\n\
                    Your configured value: {configured}\n\n\
                    Please set themes.api_url in config.toml to an http:// or https:// URL."
                )
            }
            ConfigValidationError::CacheDuration { configured, limit } => {
                format!(
                    "Catalog cache duration too high!\n\n\
                    Your configured value: {configured} minutes\n\
                    Recommended maximum: {limit} minutes\n\n\
                    Please update themes.cache_duration_minutes in config.toml."
                )
            }
            ConfigValidationError::RequestTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Catalog request timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update themes.request_timeout_secs in config.toml."
                )
            }
            ConfigValidationError::ReadTimeout {
                field,
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Style cache wait bound out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update cache.{field} in config.toml."
                )
            }
            ConfigValidationError::ColorMode { configured } => {
                format!(
                    "Unknown default color mode '{configured}'!\n\n\
                    Supported modes: light, dark, auto\n\n\
                    Please update switcher.default_color_mode in config.toml."
                )
            }
            ConfigValidationError::CookieNamespace => "Cookie namespace is empty!\n\n\
                Selection cookies need a prefix such as 'bootswatch'.\n\n\
                Please update switcher.cookie_namespace in config.toml."
                .to_string(),
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

use thiserror::Error;

/// Application-wide error types for the `swatch` host.
///
/// Library code in the core crate recovers from catalog failures on its own;
/// what reaches this type are problems of the host itself: configuration that
/// cannot be loaded, a logger that cannot be installed, I/O on log files, and
/// failed explicit reloads of the style cache.
///
/// # Examples
///
/// ```no_run
/// use swatch::config::{self, ConfigLoadResult};
/// use swatch::error::{AppError, AppResult};
///
/// fn load() -> AppResult<Box<config::AppConfig>> {
///     match config::load_config(None) {
///         ConfigLoadResult::Success(config) => Ok(config),
///         ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
///             Err(AppError::Config(msg))
///         }
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// Raised when configuration files cannot be read or parsed. Values that
    /// parse but fall outside the supported ranges are reported as warnings
    /// instead.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// File system and I/O failures, e.g. an unwritable log file.
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    /// A style cache operation that cannot degrade silently failed.
    #[error("Style Cache Error: {0}")]
    Cache(#[from] server::common::CacheError),

    /// The theme catalog client could not be built.
    #[error("Theme Source Error: {0}")]
    ThemeSource(#[from] server::common::ThemeSourceError),

    /// The global logger was already installed.
    #[error("Logger Error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use server::common::CacheError;

    #[test]
    fn test_display_prefixes_category() {
        let error = AppError::Config("missing file".to_string());
        assert_eq!(error.to_string(), "Configuration Error: missing file");
    }

    #[test]
    fn test_cache_errors_convert() {
        let error: AppError = CacheError::NoRuntime.into();
        assert!(matches!(error, AppError::Cache(CacheError::NoRuntime)));
        assert!(error.to_string().starts_with("Style Cache Error:"));
    }
}

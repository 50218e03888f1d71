use std::time::Duration;
use thiserror::Error;

/// Errors raised while talking to the remote theme catalog.
///
/// These never escape the theme source client: every variant is recovered by
/// falling back to the built-in themes. They exist so that the fallback path can
/// log a precise cause and so that tests can assert on the failure mode.
///
/// # Error Categories
///
/// ## Transport Errors
/// - [`ClientCreation`] - HTTP client initialization failures
/// - [`RequestFailed`] - Connection refused, DNS failures, broken bodies
/// - [`Timeout`] - The request did not finish within the configured timeout
///
/// ## Payload Errors
/// - [`UnexpectedStatus`] - Anything other than `200 OK`
/// - [`MalformedPayload`] - The body was not valid catalog JSON
/// - [`MissingThemes`] - Valid JSON without a `themes` list
///
/// # Examples
///
/// ```no_run
/// use server::common::ThemeSourceError;
///
/// fn describe(error: &ThemeSourceError) -> &'static str {
///     match error {
///         ThemeSourceError::Timeout { .. } => "catalog too slow",
///         ThemeSourceError::UnexpectedStatus { .. } => "catalog unavailable",
///         _ => "catalog unusable",
///     }
/// }
/// ```
///
/// [`ClientCreation`]: ThemeSourceError::ClientCreation
/// [`RequestFailed`]: ThemeSourceError::RequestFailed
/// [`Timeout`]: ThemeSourceError::Timeout
/// [`UnexpectedStatus`]: ThemeSourceError::UnexpectedStatus
/// [`MalformedPayload`]: ThemeSourceError::MalformedPayload
/// [`MissingThemes`]: ThemeSourceError::MissingThemes
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ThemeSourceError {
    /// The HTTP client could not be built from the configuration.
    #[error("HTTP client creation failed: {reason}")]
    ClientCreation { reason: String },

    /// The request could not be sent or its body could not be read.
    #[error("Request failed: {url} - {reason}")]
    RequestFailed { url: String, reason: String },

    /// The request exceeded the configured timeout.
    #[error("Request timeout after {seconds}s: {url}")]
    Timeout { url: String, seconds: u64 },

    /// The catalog answered with a status other than `200 OK`.
    #[error("Catalog returned status {status}: {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// The body could not be parsed as a catalog.
    #[error("Malformed catalog payload: {reason}")]
    MalformedPayload { reason: String },

    /// The body parsed but carried no theme list.
    #[error("Catalog payload has no themes")]
    MissingThemes,
}

impl ThemeSourceError {
    /// Classifies a reqwest failure for `url`.
    pub fn from_reqwest(url: &str, timeout: Duration, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                seconds: timeout.as_secs(),
            }
        } else {
            Self::RequestFailed {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }
}

/// Errors raised by a population cycle of the style cache.
///
/// Background population logs these and leaves the cache non-ready; only
/// [`StyleCache::reload`](crate::style_cache::StyleCache::reload) returns them
/// to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    /// The provider panicked while producing the theme list.
    #[error("Style provider panicked during population: {reason}")]
    PopulationPanicked { reason: String },

    /// The population task was cancelled before it finished.
    #[error("Population task failed: {reason}")]
    TaskFailed { reason: String },

    /// No tokio runtime was available to run the population task.
    #[error("No async runtime available to populate the style cache")]
    NoRuntime,
}

impl From<tokio::task::JoinError> for CacheError {
    fn from(error: tokio::task::JoinError) -> Self {
        if error.is_panic() {
            let payload = error.into_panic();
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic payload".to_string());
            Self::PopulationPanicked { reason }
        } else {
            Self::TaskFailed {
                reason: error.to_string(),
            }
        }
    }
}

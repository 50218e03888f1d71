use super::StyleProvider;
use super::builtin::builtin_styles;
use super::response_cache::ResponseCache;
use crate::common::ThemeSourceError;
use crate::config::ThemeSourceConfig;
use crate::model::{BootswatchCatalog, ThemeStyle};
use async_trait::async_trait;
use reqwest::StatusCode;

/// Theme source backed by the Bootswatch catalog API.
///
/// Every call starts from the built-in themes and appends the remote catalog
/// when it can be fetched and parsed. Successful catalog bodies are reused for
/// the configured cache duration.
///
/// # Examples
///
/// ```no_run
/// use server::config::ThemeSourceConfig;
/// use server::provider::{BootswatchStyleProvider, StyleProvider};
///
/// # async fn example() -> Result<(), server::common::ThemeSourceError> {
/// let provider = BootswatchStyleProvider::new(ThemeSourceConfig::default())?;
/// let styles = provider.fetch_all().await;
/// assert!(styles.len() >= 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BootswatchStyleProvider {
    http_client: reqwest::Client,
    config: ThemeSourceConfig,
    response_cache: ResponseCache,
}

impl BootswatchStyleProvider {
    /// Builds a provider with its own HTTP client configured from `config`.
    pub fn new(config: ThemeSourceConfig) -> Result<Self, ThemeSourceError> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ThemeSourceError::ClientCreation {
                reason: e.to_string(),
            })?;

        log::debug!(
            "Initialized Bootswatch client for {} (timeout: {:?}, cache: {:?})",
            config.api_url(),
            config.request_timeout(),
            config.cache_duration()
        );

        Ok(Self::with_client(http_client, config))
    }

    /// Builds a provider around an existing HTTP client.
    pub fn with_client(http_client: reqwest::Client, config: ThemeSourceConfig) -> Self {
        let response_cache = ResponseCache::new(config.cache_duration());
        Self {
            http_client,
            config,
            response_cache,
        }
    }

    pub fn config(&self) -> &ThemeSourceConfig {
        &self.config
    }

    pub fn response_cache(&self) -> &ResponseCache {
        &self.response_cache
    }

    /// Fetches and parses the remote catalog, reusing a cached body when fresh.
    ///
    /// Only bodies that parse into a catalog with a theme list are cached.
    pub async fn fetch_catalog(&self) -> Result<BootswatchCatalog, ThemeSourceError> {
        let url = self.config.api_url();

        if let Some(body) = self.response_cache.get(url).await {
            return parse_catalog(&body);
        }

        let body = self.request(url).await?;
        let catalog = parse_catalog(&body)?;
        self.response_cache.set(url.to_string(), body).await;

        Ok(catalog)
    }

    async fn request(&self, url: &str) -> Result<Vec<u8>, ThemeSourceError> {
        let timeout = self.config.request_timeout();
        log::debug!("Requesting theme catalog from {url}");

        let response = self
            .http_client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ThemeSourceError::from_reqwest(url, timeout, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ThemeSourceError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ThemeSourceError::from_reqwest(url, timeout, e))?;

        Ok(body.to_vec())
    }
}

fn parse_catalog(body: &[u8]) -> Result<BootswatchCatalog, ThemeSourceError> {
    let catalog: BootswatchCatalog =
        serde_json::from_slice(body).map_err(|e| ThemeSourceError::MalformedPayload {
            reason: e.to_string(),
        })?;

    if catalog.themes.is_none() {
        return Err(ThemeSourceError::MissingThemes);
    }

    Ok(catalog)
}

#[async_trait]
impl StyleProvider for BootswatchStyleProvider {
    async fn fetch_all(&self) -> Vec<ThemeStyle> {
        let mut styles = builtin_styles(self.config.static_base_path());

        match self.fetch_catalog().await {
            Ok(catalog) => {
                let themes = catalog.themes.unwrap_or_default();
                let count = themes.len();
                styles.reserve(count);
                styles.extend(themes.into_iter().map(ThemeStyle::from));
                log::info!(
                    "Loaded {count} themes from the Bootswatch catalog (version: {})",
                    catalog.version.as_deref().unwrap_or("unknown")
                );
            }
            Err(ThemeSourceError::Timeout { url, seconds }) => {
                log::warn!(
                    "Timed out after {seconds}s fetching themes from {url}. Using built-in styles."
                );
            }
            Err(e) => {
                log::warn!("Bootswatch catalog unavailable: {e}. Using built-in styles.");
            }
        }

        styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_parse_catalog_accepts_themes() {
        let catalog = assert_ok!(parse_catalog(
            br#"{"version":"5","themes":[{"name":"flatly","cssCdn":"c"}]}"#
        ));
        assert_eq!(catalog.version.as_deref(), Some("5"));
        assert_eq!(catalog.themes.map(|t| t.len()), Some(1));
    }

    #[test]
    fn test_parse_catalog_rejects_missing_themes() {
        let error = assert_err!(parse_catalog(br#"{"version":"5"}"#));
        assert_eq!(error, ThemeSourceError::MissingThemes);
    }

    #[test]
    fn test_parse_catalog_rejects_garbage() {
        let error = assert_err!(parse_catalog(b"<html>oops</html>"));
        assert!(matches!(error, ThemeSourceError::MalformedPayload { .. }));
    }

    #[test]
    fn test_empty_theme_list_is_valid() {
        let catalog = assert_ok!(parse_catalog(br#"{"version":"5","themes":[]}"#));
        assert_eq!(catalog.themes.map(|t| t.len()), Some(0));
    }
}

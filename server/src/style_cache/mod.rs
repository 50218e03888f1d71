//! In-memory style cache with one-shot background population.
//!
//! The cache owns a single published [`CatalogSnapshot`]. Population runs at
//! most once per cache instance in a background task; readers never take a
//! lock on the snapshot and never wait longer than the configured bounds.
//!
//! ```text
//! Uninitialized --start_population()--> Populating --ok--> Ready
//!                                            |
//!                                            +--panic--> Faulted (no snapshot)
//!                                            +--panic--> Ready   (reload published)
//! ```
//!
//! Every cycle, background or [`StyleCache::reload`], takes a generation
//! number when it starts. A cycle only publishes if no later cycle has
//! published first, so a slow background fetch never replaces a newer
//! snapshot.

pub mod snapshot;

pub use snapshot::CatalogSnapshot;

use crate::common::{CacheError, ThemeSourceError};
use crate::config::{StyleCacheConfig, ThemeSourceConfig};
use crate::model::ThemeStyle;
use crate::provider::{BootswatchStyleProvider, StyleProvider};
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::time::timeout;

/// Lifecycle of a style cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationState {
    /// Population has not been started
    Uninitialized,
    /// The background population task is running
    Populating,
    /// A snapshot has been published
    Ready,
    /// The population task failed and no snapshot is published
    Faulted,
}

impl PopulationState {
    /// Whether the population task has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready | Self::Faulted)
    }
}

struct Inner {
    provider: Arc<dyn StyleProvider>,
    config: StyleCacheConfig,
    snapshot: ArcSwapOption<CatalogSnapshot>,
    started: AtomicBool,
    generations: AtomicU64,
    state: watch::Sender<PopulationState>,
}

/// Result of one population cycle.
struct CycleOutcome {
    /// Themes in the snapshot the cycle built
    count: usize,
    /// False when a later cycle had already published
    published: bool,
}

/// Shared, cheaply clonable cache of the theme catalog.
///
/// The host creates one instance per process and hands clones to whoever
/// renders themes. Reads against a published snapshot are lock-free.
///
/// # Examples
///
/// ```no_run
/// use server::config::{StyleCacheConfig, ThemeSourceConfig};
/// use server::style_cache::StyleCache;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let cache = StyleCache::from_config(ThemeSourceConfig::default(), StyleCacheConfig::default())?;
/// cache.start_population();
///
/// // Waits at most three seconds for the catalog.
/// let styles = cache.get_all().await;
/// let flatly = cache.get_by_name(Some("Flatly")).await;
/// println!("{} styles, flatly at {:?}", styles.len(), flatly.css_cdn_url);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StyleCache {
    inner: Arc<Inner>,
}

impl StyleCache {
    pub fn new(provider: Arc<dyn StyleProvider>, config: StyleCacheConfig) -> Self {
        let (state, _) = watch::channel(PopulationState::Uninitialized);
        Self {
            inner: Arc::new(Inner {
                provider,
                config,
                snapshot: ArcSwapOption::empty(),
                started: AtomicBool::new(false),
                generations: AtomicU64::new(0),
                state,
            }),
        }
    }

    /// Creates a cache backed by the Bootswatch catalog.
    pub fn from_config(
        source: ThemeSourceConfig,
        config: StyleCacheConfig,
    ) -> Result<Self, ThemeSourceError> {
        let provider = BootswatchStyleProvider::new(source)?;
        Ok(Self::new(Arc::new(provider), config))
    }

    pub fn config(&self) -> &StyleCacheConfig {
        &self.inner.config
    }

    pub fn state(&self) -> PopulationState {
        *self.inner.state.borrow()
    }

    pub fn is_ready(&self) -> bool {
        self.state() == PopulationState::Ready
    }

    /// Starts background population unless it was already started.
    ///
    /// Never blocks. Only the first caller spawns the population task and gets
    /// `true`; concurrent and later callers return `false` immediately.
    /// Must be called from within a tokio runtime.
    pub fn start_population(&self) -> bool {
        if self
            .inner
            .started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("Style cache population already started");
            return false;
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                log::error!("Cannot populate style cache: {}", CacheError::NoRuntime);
                self.inner.started.store(false, Ordering::Release);
                return false;
            }
        };

        self.inner.state.send_replace(PopulationState::Populating);

        let inner = Arc::clone(&self.inner);
        handle.spawn(async move {
            inner.populate_in_background().await;
        });

        log::debug!("Style cache population started in background");
        true
    }

    /// Waits up to `limit` for the population task to settle.
    ///
    /// Returns `true` only if the cache is ready when the wait ends.
    pub async fn wait_until_ready(&self, limit: Duration) -> bool {
        let mut state = self.inner.state.subscribe();
        let settled = async move {
            state
                .wait_for(|s| s.is_settled())
                .await
                .map(|s| *s == PopulationState::Ready)
        };

        matches!(timeout(limit, settled).await, Ok(Ok(true)))
    }

    /// The currently published snapshot, if any.
    pub fn snapshot(&self) -> Option<Arc<CatalogSnapshot>> {
        self.inner.snapshot.load_full()
    }

    /// Number of themes in the published snapshot.
    pub fn len(&self) -> usize {
        match &*self.inner.snapshot.load() {
            Some(snapshot) => snapshot.len(),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of every cached theme.
    ///
    /// While population is in flight this waits up to the configured full-list
    /// timeout, then answers with whatever has been published (possibly
    /// nothing). Never waits when population was not started or has failed.
    pub async fn get_all(&self) -> Vec<ThemeStyle> {
        if let Some(snapshot) = self.snapshot() {
            return snapshot.styles().to_vec();
        }

        match self.state() {
            PopulationState::Populating => {
                let limit = self.inner.config.all_styles_timeout();
                if !self.wait_until_ready(limit).await
                    && self.state() == PopulationState::Populating
                {
                    log::warn!(
                        "Timed out after {limit:?} waiting for styles to load. Returning cached styles if available."
                    );
                }
            }
            PopulationState::Uninitialized => {
                log::debug!("Style cache read before population was started");
            }
            PopulationState::Ready | PopulationState::Faulted => {}
        }

        self.snapshot()
            .map(|snapshot| snapshot.styles().to_vec())
            .unwrap_or_default()
    }

    /// Case-insensitive lookup of one theme.
    ///
    /// Returns the empty sentinel for a missing or empty name without waiting.
    /// While population is in flight the lookup waits up to the configured
    /// lookup timeout and retries once.
    pub async fn get_by_name(&self, name: Option<&str>) -> ThemeStyle {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return ThemeStyle::default();
        };

        if let Some(found) = self.lookup(name) {
            return found.unwrap_or_default();
        }

        if self.state() == PopulationState::Populating {
            let limit = self.inner.config.style_lookup_timeout();
            if self.wait_until_ready(limit).await {
                if let Some(found) = self.lookup(name) {
                    return found.unwrap_or_default();
                }
            } else {
                log::debug!("Style '{name}' requested before the cache was ready");
            }
        }

        ThemeStyle::default()
    }

    /// Runs one population cycle inline and replaces the published snapshot.
    ///
    /// Readers holding the previous snapshot keep it. The one-shot background
    /// guard is left untouched. If a cycle that started later publishes
    /// first, that snapshot is kept and its size is returned.
    pub async fn reload(&self) -> Result<usize, CacheError> {
        match self.inner.run_cycle().await {
            Ok(CycleOutcome {
                count,
                published: true,
            }) => {
                self.inner.state.send_replace(PopulationState::Ready);
                log::info!("Style cache reloaded with {count} styles");
                Ok(count)
            }
            Ok(CycleOutcome {
                published: false, ..
            }) => {
                log::debug!("Reload superseded by a newer population cycle");
                Ok(self.len())
            }
            Err(e) => {
                log::error!("Error reloading style cache: {e}");
                Err(e)
            }
        }
    }

    /// `None` when no snapshot is published; `Some(None)` on a miss.
    fn lookup(&self, name: &str) -> Option<Option<ThemeStyle>> {
        match &*self.inner.snapshot.load() {
            Some(snapshot) => Some(snapshot.get(name).cloned()),
            None => None,
        }
    }
}

impl Inner {
    async fn populate_in_background(self: Arc<Self>) {
        let started_at = Instant::now();

        match self.run_cycle().await {
            Ok(CycleOutcome {
                count,
                published: true,
            }) => {
                self.state.send_replace(PopulationState::Ready);
                log::info!(
                    "Style cache successfully initialized with {count} styles in {:?}",
                    started_at.elapsed()
                );
            }
            Ok(CycleOutcome {
                published: false, ..
            }) => {
                self.state.send_replace(PopulationState::Ready);
                log::debug!("Background population superseded by a reload; result discarded");
            }
            Err(e) => {
                log::error!("Error during style cache population: {e}");
                // Checked under the state lock so a concurrent reload is not overridden.
                self.state.send_modify(|state| {
                    *state = if self.snapshot.load().is_some() {
                        PopulationState::Ready
                    } else {
                        PopulationState::Faulted
                    };
                });
            }
        }
    }

    /// Fetches, builds and publishes a new snapshot.
    ///
    /// The provider runs in its own task so that a panic surfaces as an error
    /// instead of tearing down the caller.
    async fn run_cycle(&self) -> Result<CycleOutcome, CacheError> {
        let generation = self.generations.fetch_add(1, Ordering::AcqRel) + 1;
        let provider = Arc::clone(&self.provider);
        let styles = tokio::spawn(async move { provider.fetch_all().await }).await?;

        let snapshot = Arc::new(CatalogSnapshot::new(styles).with_generation(generation));
        let count = snapshot.len();
        let previous = self.snapshot.rcu(|current| match current {
            Some(current) if current.generation() > generation => Some(Arc::clone(current)),
            _ => Some(Arc::clone(&snapshot)),
        });
        let published = previous.is_none_or(|previous| previous.generation() < generation);

        Ok(CycleOutcome { count, published })
    }
}

impl std::fmt::Debug for StyleCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleCache")
            .field("state", &self.state())
            .field("styles", &self.len())
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedProvider(Vec<ThemeStyle>);

    #[async_trait]
    impl StyleProvider for FixedProvider {
        async fn fetch_all(&self) -> Vec<ThemeStyle> {
            self.0.clone()
        }
    }

    fn named(name: &str) -> ThemeStyle {
        ThemeStyle {
            name: Some(name.to_string()),
            ..ThemeStyle::default()
        }
    }

    fn cache_with(styles: Vec<ThemeStyle>) -> StyleCache {
        StyleCache::new(
            Arc::new(FixedProvider(styles)),
            StyleCacheConfig::new(Duration::from_millis(500), Duration::from_millis(200)),
        )
    }

    #[tokio::test]
    async fn test_uninitialized_cache_answers_empty_without_waiting() {
        let cache = cache_with(vec![named("mom")]);
        let started = Instant::now();

        assert!(cache.get_all().await.is_empty());
        assert!(cache.get_by_name(Some("mom")).await.is_empty());
        assert_eq!(cache.state(), PopulationState::Uninitialized);
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_population_publishes_snapshot() {
        let cache = cache_with(vec![named("mom"), named("texecon")]);

        assert!(cache.start_population());
        assert!(cache.wait_until_ready(Duration::from_secs(1)).await);

        assert_eq!(cache.state(), PopulationState::Ready);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_by_name(Some("TEXECON")).await.name(), "texecon");
    }

    #[tokio::test]
    async fn test_second_start_is_a_no_op() {
        let cache = cache_with(vec![named("mom")]);

        assert!(cache.start_population());
        assert!(!cache.start_population());
        assert!(!cache.clone().start_population());
    }

    #[test]
    fn test_start_without_runtime_releases_guard() {
        let cache = cache_with(vec![named("mom")]);

        assert!(!cache.start_population());
        assert_eq!(cache.state(), PopulationState::Uninitialized);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async {
            assert!(cache.start_population());
            assert!(cache.wait_until_ready(Duration::from_secs(1)).await);
        });
    }

    #[tokio::test]
    async fn test_empty_names_short_circuit() {
        let cache = cache_with(vec![named("mom")]);
        cache.start_population();
        assert!(cache.wait_until_ready(Duration::from_secs(1)).await);

        assert!(cache.get_by_name(None).await.is_empty());
        assert!(cache.get_by_name(Some("")).await.is_empty());
        assert!(cache.get_by_name(Some("missing")).await.is_empty());
    }
}

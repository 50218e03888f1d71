//! Theme source client: produces the current theme list from built-in themes
//! and the remote Bootswatch catalog.

pub mod bootswatch;
pub mod builtin;
pub mod response_cache;

pub use bootswatch::BootswatchStyleProvider;
pub use builtin::{BUILTIN_THEME_NAMES, builtin_asset_path, builtin_styles};
pub use response_cache::{CachedResponse, ResponseCache};

use crate::model::ThemeStyle;
use async_trait::async_trait;

/// Source of the theme catalog consumed by the style cache.
///
/// Implementations must never fail visibly: transient problems are recovered
/// internally and expressed as a smaller (but still usable) list.
///
/// # Examples
///
/// ```no_run
/// use server::model::ThemeStyle;
/// use server::provider::{StyleProvider, builtin_styles};
/// use async_trait::async_trait;
///
/// struct BuiltinOnly;
///
/// #[async_trait]
/// impl StyleProvider for BuiltinOnly {
///     async fn fetch_all(&self) -> Vec<ThemeStyle> {
///         builtin_styles("/_content/swatch")
///     }
/// }
/// ```
#[async_trait]
pub trait StyleProvider: Send + Sync {
    /// Returns every available theme, built-ins first.
    async fn fetch_all(&self) -> Vec<ThemeStyle>;

    /// Case-insensitive lookup of a single theme.
    ///
    /// Returns the empty sentinel when `name` is missing or empty, or when no
    /// theme matches. When several themes share a name the last one wins.
    async fn fetch_one(&self, name: Option<&str>) -> ThemeStyle {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return ThemeStyle::default();
        };

        self.fetch_all()
            .await
            .into_iter()
            .rev()
            .find(|style| style.matches_name(name))
            .unwrap_or_default()
    }
}

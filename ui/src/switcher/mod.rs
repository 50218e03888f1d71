//! Theme switcher rendering for server-rendered pages.
//!
//! [`ThemeSwitcher`] ties a [`StyleCache`] to the switcher configuration and
//! answers the three questions a page layout asks: which stylesheet to link,
//! which attributes go on `<html>`, and what the switcher widget looks like.

pub mod markup;
pub mod selection;

pub use markup::{escape_html, html_attributes, render_attributes, render_switcher, theme_url};
pub use selection::{ThemeSelection, cookie_value, parse_cookies};

use crate::config::SwitcherConfig;
use server::style_cache::StyleCache;

#[derive(Debug, Clone)]
pub struct ThemeSwitcher {
    cache: StyleCache,
    config: SwitcherConfig,
}

impl ThemeSwitcher {
    pub fn new(cache: StyleCache, config: SwitcherConfig) -> Self {
        Self { cache, config }
    }

    pub fn cache(&self) -> &StyleCache {
        &self.cache
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    /// Current selection from a raw `Cookie` header.
    pub fn selection(&self, cookie_header: Option<&str>) -> ThemeSelection {
        ThemeSelection::from_cookie_header(cookie_header, &self.config)
    }

    pub async fn stylesheet_url(&self, selection: &ThemeSelection) -> String {
        theme_url(
            &self.cache,
            selection.theme(),
            self.config.default_stylesheet_url(),
        )
        .await
    }

    pub async fn render(&self, selection: &ThemeSelection) -> String {
        render_switcher(&self.cache, selection).await
    }

    /// Rendered `<html>` attributes without extras.
    pub fn html_attributes(&self, selection: &ThemeSelection) -> String {
        render_attributes(&html_attributes(
            selection,
            std::iter::empty::<(String, String)>(),
        ))
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_COOKIE_NAMESPACE: &str = "bootswatch";
pub const DEFAULT_THEME: &str = "default";
pub const DEFAULT_COLOR_MODE: &str = "light";
pub const DEFAULT_STYLESHEET_URL: &str = "/lib/bootstrap/dist/css/bootstrap.min.css";

/// Theme switcher configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwitcherConfig {
    cookie_namespace: Option<String>,
    default_theme: Option<String>,
    default_color_mode: Option<String>,
    default_stylesheet_url: Option<String>,
}

impl SwitcherConfig {
    /// Prefix of the selection cookies (`<namespace>-theme`, `<namespace>-color-mode`)
    pub fn cookie_namespace(&self) -> &str {
        self.cookie_namespace
            .as_deref()
            .unwrap_or(DEFAULT_COOKIE_NAMESPACE)
    }

    pub fn default_theme(&self) -> &str {
        self.default_theme.as_deref().unwrap_or(DEFAULT_THEME)
    }

    pub fn default_color_mode(&self) -> &str {
        self.default_color_mode
            .as_deref()
            .unwrap_or(DEFAULT_COLOR_MODE)
    }

    /// Stock Bootstrap stylesheet used for the `default` theme and unknown themes
    pub fn default_stylesheet_url(&self) -> &str {
        self.default_stylesheet_url
            .as_deref()
            .unwrap_or(DEFAULT_STYLESHEET_URL)
    }

    pub fn theme_cookie(&self) -> String {
        format!("{}-theme", self.cookie_namespace())
    }

    pub fn color_mode_cookie(&self) -> String {
        format!("{}-color-mode", self.cookie_namespace())
    }
}

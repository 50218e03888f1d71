use serde::{Deserialize, Serialize};

/// Describes one visual theme that can be offered by the theme switcher.
///
/// Every field is optional so that the [`Default`] value doubles as the empty
/// sentinel returned for lookups that find nothing. Entries that end up in a
/// published catalog snapshot always carry a non-empty `name`.
///
/// # Examples
///
/// ```no_run
/// use server::model::ThemeStyle;
///
/// let flatly = ThemeStyle {
///     name: Some("flatly".to_string()),
///     css_cdn_url: Some("https://cdn.jsdelivr.net/npm/bootswatch@5/dist/flatly/bootstrap.min.css".to_string()),
///     ..ThemeStyle::default()
/// };
/// assert!(flatly.matches_name("FLATLY"));
/// assert!(ThemeStyle::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    /// Unique, case-insensitive identifier of the theme
    pub name: Option<String>,
    /// Human readable label
    pub description: Option<String>,
    /// Location of the unminified stylesheet
    pub css_url: Option<String>,
    /// Location of the minified stylesheet
    pub css_min_url: Option<String>,
    /// Location of the CDN-hosted stylesheet, preferred when rendering
    pub css_cdn_url: Option<String>,
    /// Thumbnail image of the theme
    pub thumbnail_url: Option<String>,
    /// Preview page of the theme
    pub preview_url: Option<String>,
    /// Legacy LESS source
    pub less_url: Option<String>,
    /// Legacy LESS variables
    pub less_variables_url: Option<String>,
    /// SCSS source
    pub scss_url: Option<String>,
    /// SCSS variables
    pub scss_variables_url: Option<String>,
}

impl ThemeStyle {
    /// Returns `true` for the empty sentinel, i.e. a value with every field unset.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The theme name, or `""` when unset.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Case-insensitive comparison of the theme name against `name`.
    ///
    /// An unset or empty theme name never matches.
    pub fn matches_name(&self, name: &str) -> bool {
        match self.name.as_deref() {
            Some(own) if !own.is_empty() => own.to_lowercase() == name.to_lowercase(),
            _ => false,
        }
    }

    /// Stylesheet to link when this theme is selected: the CDN location first,
    /// then the minified and plain stylesheets.
    pub fn stylesheet_url(&self) -> Option<&str> {
        self.css_cdn_url
            .as_deref()
            .or(self.css_min_url.as_deref())
            .or(self.css_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Normalizes a theme name into the key used for case-insensitive lookups.
pub fn theme_key(name: &str) -> String {
    name.to_lowercase()
}

/// Top level payload returned by the Bootswatch catalog API.
///
/// A payload without a `themes` list is treated as malformed by the provider.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BootswatchCatalog {
    /// Bootstrap major version the catalog targets
    pub version: Option<String>,
    /// Available themes
    pub themes: Option<Vec<BootswatchTheme>>,
}

/// One theme descriptor as published by the Bootswatch catalog API.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BootswatchTheme {
    pub name: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub preview: Option<String>,
    pub css: Option<String>,
    pub css_min: Option<String>,
    pub css_cdn: Option<String>,
    pub less: Option<String>,
    pub less_variables: Option<String>,
    pub scss: Option<String>,
    pub scss_variables: Option<String>,
}

impl From<BootswatchTheme> for ThemeStyle {
    fn from(theme: BootswatchTheme) -> Self {
        Self {
            name: theme.name,
            description: theme.description,
            css_url: theme.css,
            css_min_url: theme.css_min,
            css_cdn_url: theme.css_cdn,
            thumbnail_url: theme.thumbnail,
            preview_url: theme.preview,
            less_url: theme.less,
            less_variables_url: theme.less_variables,
            scss_url: theme.scss,
            scss_variables_url: theme.scss_variables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_sentinel() {
        let sentinel = ThemeStyle::default();
        assert!(sentinel.is_empty());
        assert_eq!(sentinel.name(), "");
        assert_eq!(sentinel.stylesheet_url(), None);
    }

    #[test]
    fn test_named_style_is_not_empty() {
        let style = ThemeStyle {
            name: Some("darkly".to_string()),
            ..ThemeStyle::default()
        };
        assert!(!style.is_empty());
        assert!(style.matches_name("DarKly"));
        assert!(!style.matches_name("dark"));
    }

    #[test]
    fn test_unnamed_style_never_matches() {
        let style = ThemeStyle {
            name: Some(String::new()),
            ..ThemeStyle::default()
        };
        assert!(!style.matches_name(""));
        assert!(!ThemeStyle::default().matches_name(""));
    }

    #[test]
    fn test_stylesheet_url_prefers_cdn() {
        let style = ThemeStyle {
            css_url: Some("a".to_string()),
            css_min_url: Some("b".to_string()),
            css_cdn_url: Some("c".to_string()),
            ..ThemeStyle::default()
        };
        assert_eq!(style.stylesheet_url(), Some("c"));

        let without_cdn = ThemeStyle {
            css_cdn_url: None,
            ..style
        };
        assert_eq!(without_cdn.stylesheet_url(), Some("b"));
    }

    #[test]
    fn test_remote_theme_maps_field_for_field() {
        let json = r#"{
            "name": "flatly",
            "description": "Flat and modern",
            "thumbnail": "t",
            "preview": "p",
            "css": "a",
            "cssMin": "b",
            "cssCdn": "c",
            "less": "l",
            "lessVariables": "lv",
            "scss": "s",
            "scssVariables": "sv",
            "cssRtl": "ignored"
        }"#;
        let remote: BootswatchTheme = serde_json::from_str(json).unwrap();
        let style = ThemeStyle::from(remote);

        assert_eq!(style.name.as_deref(), Some("flatly"));
        assert_eq!(style.description.as_deref(), Some("Flat and modern"));
        assert_eq!(style.thumbnail_url.as_deref(), Some("t"));
        assert_eq!(style.preview_url.as_deref(), Some("p"));
        assert_eq!(style.css_url.as_deref(), Some("a"));
        assert_eq!(style.css_min_url.as_deref(), Some("b"));
        assert_eq!(style.css_cdn_url.as_deref(), Some("c"));
        assert_eq!(style.less_url.as_deref(), Some("l"));
        assert_eq!(style.less_variables_url.as_deref(), Some("lv"));
        assert_eq!(style.scss_url.as_deref(), Some("s"));
        assert_eq!(style.scss_variables_url.as_deref(), Some("sv"));
    }

    #[test]
    fn test_theme_style_serializes_camel_case() {
        let style = ThemeStyle {
            name: Some("flatly".to_string()),
            css_cdn_url: Some("c".to_string()),
            ..ThemeStyle::default()
        };
        let value = serde_json::to_value(&style).unwrap();
        assert_eq!(value["cssCdnUrl"], "c");
        assert_eq!(value["name"], "flatly");
    }
}

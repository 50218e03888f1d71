use crate::config::SwitcherConfig;

/// The theme and color mode a visitor picked, as remembered in cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSelection {
    theme: String,
    color_mode: String,
}

impl ThemeSelection {
    pub fn new(theme: impl Into<String>, color_mode: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            color_mode: color_mode.into(),
        }
    }

    /// Selection from the configured defaults, for visitors without cookies.
    pub fn defaults(config: &SwitcherConfig) -> Self {
        Self::new(config.default_theme(), config.default_color_mode())
    }

    /// Reads `<namespace>-theme` and `<namespace>-color-mode` from a raw
    /// `Cookie` request header. Missing or empty cookies fall back to the
    /// configured defaults.
    pub fn from_cookie_header(header: Option<&str>, config: &SwitcherConfig) -> Self {
        let header = header.unwrap_or_default();
        let theme_cookie = config.theme_cookie();
        let color_mode_cookie = config.color_mode_cookie();

        let theme = cookie_value(header, &theme_cookie).unwrap_or(config.default_theme());
        let color_mode =
            cookie_value(header, &color_mode_cookie).unwrap_or(config.default_color_mode());

        Self::new(theme, color_mode)
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn color_mode(&self) -> &str {
        &self.color_mode
    }

    /// Whether the stock Bootstrap stylesheet is selected.
    pub fn is_default_theme(&self) -> bool {
        self.theme == crate::config::switcher::DEFAULT_THEME
    }
}

/// Splits a `Cookie` header into name/value pairs.
///
/// Pairs without `=` are skipped and surrounding double quotes are removed
/// from values.
pub fn parse_cookies(header: &str) -> impl Iterator<Item = (&str, &str)> {
    header.split(';').filter_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        Some((name, value))
    })
}

/// First non-empty value of cookie `name`.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    parse_cookies(header)
        .find(|(cookie, _)| *cookie == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookies_trims_and_unquotes() {
        let pairs: Vec<_> = parse_cookies(" a=1; b = \"two\" ;broken; =x; c=").collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "two"), ("c", "")]);
    }

    #[test]
    fn test_cookie_value_takes_first_match() {
        assert_eq!(cookie_value("t=one; t=two", "t"), Some("one"));
        assert_eq!(cookie_value("t=", "t"), None);
        assert_eq!(cookie_value("other=1", "t"), None);
    }
}

use super::selection::ThemeSelection;
use server::style_cache::StyleCache;
use std::borrow::Cow;
use std::fmt::Write;

/// Stylesheet URL for `theme`.
///
/// `"default"` always maps to `default_url`. Any other name resolves to the
/// theme's CDN stylesheet and falls back to `default_url` when the theme is
/// unknown or has no CDN location.
pub async fn theme_url(cache: &StyleCache, theme: &str, default_url: &str) -> String {
    if theme == crate::config::switcher::DEFAULT_THEME {
        return default_url.to_string();
    }

    cache
        .get_by_name(Some(theme))
        .await
        .css_cdn_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| default_url.to_string())
}

/// Switcher widget: a color mode toggle button and a dropdown with one entry
/// per cached theme. The selected theme carries the `active` class.
pub async fn render_switcher(cache: &StyleCache, selection: &ThemeSelection) -> String {
    let styles = cache.get_all().await;
    let mut html = String::with_capacity(1024 + styles.len() * 256);

    html.push_str(
        r#"<div class="bootswatch-theme-switcher d-flex align-items-center">
    <div class="me-2">
        <button class="btn btn-sm btn-outline-secondary" id="bootswatch-color-mode-toggle" type="button"
            aria-label="Toggle color mode">
            <i class="bootswatch-color-mode-icon"></i>
            <span class="bootswatch-color-mode-text"></span>
        </button>
    </div>
    <div class="dropdown">
        <button class="btn btn-sm btn-outline-secondary dropdown-toggle" type="button" id="bootswatchThemeDropdown"
            data-bs-toggle="dropdown" aria-expanded="false">
            Theme
        </button>
        <ul class="dropdown-menu dropdown-menu-end bootswatch-dropdown-menu" aria-labelledby="bootswatchThemeDropdown">"#,
    );

    for style in &styles {
        let class = if style.matches_name(selection.theme()) {
            "dropdown-item active"
        } else {
            "dropdown-item"
        };
        let name = escape_html(style.name());
        let url = escape_html(style.css_cdn_url.as_deref().unwrap_or_default());

        // writing into a String cannot fail
        let _ = write!(
            html,
            r##"
            <li>
                <a class="{class}" href="#" data-theme="{name}"
                    data-theme-url="{url}">
                    {name}
                </a>
            </li>"##
        );
    }

    html.push_str(
        r#"
        </ul>
    </div>
</div>"#,
    );

    html
}

/// Attributes for the `<html>` element: `lang`, `data-bs-theme` and then
/// `extra` in order. A later key replaces the value of an earlier one in place.
pub fn html_attributes<K, V>(
    selection: &ThemeSelection,
    extra: impl IntoIterator<Item = (K, V)>,
) -> Vec<(String, String)>
where
    K: Into<String>,
    V: Into<String>,
{
    let mut attributes = vec![
        ("lang".to_string(), "en".to_string()),
        (
            "data-bs-theme".to_string(),
            selection.color_mode().to_string(),
        ),
    ];

    for (key, value) in extra {
        let key = key.into();
        let value = value.into();
        match attributes.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => attributes.push((key, value)),
        }
    }

    attributes
}

/// Renders attributes as ` key="value"` pairs, values escaped.
pub fn render_attributes(attributes: &[(String, String)]) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(" {}=\"{}\"", escape_html(key), escape_html(value)))
        .collect()
}

/// Escapes text for use in HTML content and double or single quoted
/// attribute values.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("flatly"), "flatly");
        assert!(matches!(escape_html("flatly"), Cow::Borrowed(_)));
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_html_attributes_order_and_override() {
        let selection = ThemeSelection::new("flatly", "dark");
        let attributes = html_attributes(
            &selection,
            [("class", "h-100"), ("lang", "de"), ("class", "h-50")],
        );

        assert_eq!(
            attributes,
            vec![
                ("lang".to_string(), "de".to_string()),
                ("data-bs-theme".to_string(), "dark".to_string()),
                ("class".to_string(), "h-50".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_attributes_escapes_values() {
        let attributes = vec![("data-x".to_string(), "a\"b".to_string())];
        assert_eq!(render_attributes(&attributes), " data-x=\"a&quot;b\"");
    }
}

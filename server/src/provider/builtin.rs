use crate::model::ThemeStyle;

/// Names of the themes bundled with the library, in catalog order.
pub const BUILTIN_THEME_NAMES: [&str; 2] = ["mom", "texecon"];

const BUILTIN_DESCRIPTIONS: [&str; 2] = [
    "Custom theme for MOM websites",
    "Custom theme for TexEcon websites",
];

/// Locally served stylesheet of a bundled theme.
///
/// `base_path` is the prefix of the static file middleware, e.g. `/_content/swatch`.
pub fn builtin_asset_path(base_path: &str, theme: &str) -> String {
    format!(
        "{}/style/{theme}/css/bootstrap.min.css",
        base_path.trim_end_matches('/')
    )
}

/// The bundled themes. Always available, whatever the remote catalog does.
pub fn builtin_styles(base_path: &str) -> Vec<ThemeStyle> {
    BUILTIN_THEME_NAMES
        .iter()
        .zip(BUILTIN_DESCRIPTIONS)
        .map(|(name, description)| {
            let asset = builtin_asset_path(base_path, name);
            ThemeStyle {
                name: Some((*name).to_string()),
                description: Some(description.to_string()),
                css_url: Some(asset.clone()),
                css_min_url: Some(asset.clone()),
                css_cdn_url: Some(asset),
                ..ThemeStyle::default()
            }
        })
        .collect()
}

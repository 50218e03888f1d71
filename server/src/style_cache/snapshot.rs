use crate::model::{ThemeStyle, theme_key};
use std::collections::HashMap;

/// Immutable view of the theme catalog at one point in time.
///
/// The ordered list and the case-insensitive index always describe the same
/// set of themes. When two entries share a name (ignoring case) the later one
/// replaces the earlier value but keeps the earlier position. Entries without
/// a name are dropped.
///
/// The generation orders snapshots built by the same cache: a higher value
/// comes from a population cycle that started later.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    styles: Vec<ThemeStyle>,
    index: HashMap<String, usize>,
    generation: u64,
}

impl CatalogSnapshot {
    pub fn new(styles: impl IntoIterator<Item = ThemeStyle>) -> Self {
        let mut snapshot = Self::default();

        for style in styles {
            let key = match style.name.as_deref() {
                Some(name) if !name.is_empty() => theme_key(name),
                _ => {
                    log::debug!("Skipping unnamed theme entry: {style:?}");
                    continue;
                }
            };

            match snapshot.index.get(&key) {
                Some(&position) => {
                    log::debug!("Duplicate theme name '{key}', keeping the latest entry");
                    snapshot.styles[position] = style;
                }
                None => {
                    snapshot.index.insert(key, snapshot.styles.len());
                    snapshot.styles.push(style);
                }
            }
        }

        snapshot
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&ThemeStyle> {
        self.index
            .get(&theme_key(name))
            .and_then(|&position| self.styles.get(position))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&theme_key(name))
    }

    pub fn styles(&self) -> &[ThemeStyle] {
        &self.styles
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(ThemeStyle::name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(name: &str, cdn: &str) -> ThemeStyle {
        ThemeStyle {
            name: Some(name.to_string()),
            css_cdn_url: Some(cdn.to_string()),
            ..ThemeStyle::default()
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        let snapshot = CatalogSnapshot::new(vec![style("darkly", "d")]);
        assert_eq!(snapshot.get("DARKLY"), snapshot.get("darkly"));
        assert_eq!(snapshot.get("DaRkLy").map(ThemeStyle::name), Some("darkly"));
        assert!(snapshot.get("dark").is_none());
    }

    #[test]
    fn test_duplicate_names_keep_position_and_last_value() {
        let snapshot = CatalogSnapshot::new(vec![
            style("mom", "first"),
            style("flatly", "f"),
            style("MOM", "second"),
        ]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.names().collect::<Vec<_>>(), vec!["MOM", "flatly"]);
        assert_eq!(
            snapshot.get("mom").and_then(|s| s.css_cdn_url.as_deref()),
            Some("second")
        );
    }

    #[test]
    fn test_unnamed_entries_are_dropped() {
        let snapshot = CatalogSnapshot::new(vec![
            ThemeStyle::default(),
            ThemeStyle {
                name: Some(String::new()),
                ..ThemeStyle::default()
            },
            style("cosmo", "c"),
        ]);

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains("COSMO"));
    }

    #[test]
    fn test_generation_defaults_to_zero() {
        let snapshot = CatalogSnapshot::new(vec![style("cosmo", "c")]);
        assert_eq!(snapshot.generation(), 0);
        assert_eq!(snapshot.with_generation(7).generation(), 7);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = CatalogSnapshot::new(Vec::new());
        assert!(snapshot.is_empty());
        assert!(snapshot.get("anything").is_none());
    }
}

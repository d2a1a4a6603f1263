use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Locale every mapping falls back to when a key is absent.
pub const FALLBACK_LOCALE: &str = "en";

/// Locale-keyed text mapping with `en` fallback.
///
/// Each text on the banner (message, accept label, deny label, learn-more
/// label) resolves against its own map, so inconsistent key sets across maps
/// fall back independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleMap(HashMap<String, String>);

impl LocaleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(locale, text)| (locale.to_string(), text.to_string()))
                .collect(),
        )
    }

    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        self.0.insert(locale.into(), text.into());
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Text for `locale`, or the `en` entry when the locale is unmapped.
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        self.0
            .get(locale)
            .or_else(|| self.0.get(FALLBACK_LOCALE))
            .map(String::as_str)
    }

    /// Per-key merge: entries of `other` overwrite, the rest are retained.
    pub fn merge_from(&mut self, other: &LocaleMap) {
        for (locale, text) in &other.0 {
            self.0.insert(locale.clone(), text.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Two-character locale key: the page's declared language, falling back to
/// the environment's reported language. An unknown or missing language ends
/// up resolving through the `en` fallback of each map.
pub fn locale_key(document_language: Option<&str>, navigator_language: Option<&str>) -> String {
    document_language
        .filter(|lang| !lang.is_empty())
        .or(navigator_language.filter(|lang| !lang.is_empty()))
        .unwrap_or("")
        .chars()
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocaleMap {
        LocaleMap::from_pairs(&[("en", "hello"), ("fr", "bonjour")])
    }

    #[test]
    fn resolve_prefers_exact_locale() {
        assert_eq!(sample().resolve("fr"), Some("bonjour"));
    }

    #[test]
    fn unmapped_locale_falls_back_to_en() {
        assert_eq!(sample().resolve("xx"), Some("hello"));
        assert_eq!(sample().resolve(""), Some("hello"));
    }

    #[test]
    fn resolve_without_en_entry_yields_none() {
        let map = LocaleMap::from_pairs(&[("fr", "bonjour")]);
        assert_eq!(map.resolve("xx"), None);
    }

    #[test]
    fn merge_overwrites_and_retains() {
        let mut map = sample();
        map.merge_from(&LocaleMap::from_pairs(&[("fr", "salut"), ("de", "hallo")]));
        assert_eq!(map.resolve("fr"), Some("salut"));
        assert_eq!(map.resolve("de"), Some("hallo"));
        assert_eq!(map.resolve("en"), Some("hello"));
    }

    #[test]
    fn locale_key_prefers_document_language() {
        assert_eq!(locale_key(Some("fr-FR"), Some("en-US")), "fr");
        assert_eq!(locale_key(Some(""), Some("en-US")), "en");
        assert_eq!(locale_key(None, Some("de")), "de");
        assert_eq!(locale_key(None, None), "");
    }
}

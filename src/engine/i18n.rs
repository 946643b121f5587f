// Translation table for user-facing strings

use crate::engine::config::ViewDistance;
use log::debug;
use std::collections::HashMap;

/// Key to localized-string lookup
///
/// Unknown keys echo back unchanged so a missing translation degrades to the
/// raw key instead of failing the caller.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    table: HashMap<String, String>,
}

impl Translations {
    /// Empty table, every lookup echoes the key
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with the built-in English strings
    pub fn with_defaults() -> Self {
        let mut translations = Self::new();
        for (tier, label) in ViewDistance::ALL.iter().zip([
            "Near", "Moderate", "Far", "Ultra", "Mega", "Extreme",
        ]) {
            translations.insert(tier.display_key(), label);
        }
        translations
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.table.insert(key.to_string(), value.to_string());
    }

    /// Localized string for `key`, or `key` itself when unmapped
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        match self.table.get(key) {
            Some(value) => value.as_str(),
            None => {
                debug!("No translation for key: {}", key);
                key
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_key() {
        let translations = Translations::with_defaults();
        assert_eq!(
            translations.translate(ViewDistance::Near.display_key()),
            "Near"
        );
    }

    #[test]
    fn test_translate_unknown_key_echoes() {
        let translations = Translations::new();
        assert_eq!(translations.translate("no-such-key"), "no-such-key");
    }

    #[test]
    fn test_defaults_cover_every_tier() {
        let translations = Translations::with_defaults();
        for tier in ViewDistance::ALL {
            assert_ne!(translations.translate(tier.display_key()), tier.display_key());
        }
    }

    #[test]
    fn test_insert_overrides() {
        let mut translations = Translations::with_defaults();
        translations.insert(ViewDistance::Far.display_key(), "Lejos");
        assert_eq!(
            translations.translate(ViewDistance::Far.display_key()),
            "Lejos"
        );
    }
}

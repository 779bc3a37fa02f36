//! Internationalization module
//!
//! Provides translations for Indonesian (id) and English (en) languages.
//! Supports automatic language detection based on system locale.

mod en;
mod id;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            self.detect_system_language()
        } else {
            lang.to_string()
        };

        self.current_lang = lang.clone();
        self.translations = match lang.as_str() {
            "en" => en::get_translations(),
            "id" | _ => id::get_translations(),
        };

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get all translations
    pub fn get_all(&self) -> HashMap<String, String> {
        self.translations.clone()
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Get available languages
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("id", "Bahasa Indonesia"), ("en", "English")]
    }

    /// Detect system language
    fn detect_system_language(&self) -> String {
        let lang_env = std::env::var("LANG")
            .or_else(|_| std::env::var("LC_ALL"))
            .or_else(|_| std::env::var("LC_MESSAGES"))
            .unwrap_or_else(|_| "id".to_string());

        // Extract language code (e.g., "en_US.UTF-8" -> "en")
        let lang_code = lang_env
            .split('_')
            .next()
            .unwrap_or("id")
            .split('.')
            .next()
            .unwrap_or("id");

        // Only return supported languages
        match lang_code {
            "en" => "en".to_string(),
            _ => "id".to_string(),
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_resolves() {
        let i18n = I18n::new("id");
        assert_eq!(i18n.get("appliance.lamp"), "Lampu");

        let i18n = I18n::new("en");
        assert_eq!(i18n.get("appliance.lamp"), "Lamp");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let i18n = I18n::new("id");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_both_tables_cover_appliances() {
        let keys = [
            "appliance.fan",
            "appliance.computer",
            "appliance.refrigerator",
            "appliance.tv",
            "appliance.lamp",
            "appliance.ac",
        ];
        let id = I18n::new("id");
        let en = I18n::new("en");
        for key in keys {
            assert_ne!(id.get(key), key);
            assert_ne!(en.get(key), key);
        }
    }
}

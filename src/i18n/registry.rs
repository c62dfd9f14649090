//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a lazily initialized singleton (`OnceLock`). Both the
//! translations endpoint and the seed table validate language codes against it.
//! Every listed language is served.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "vi")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Vietnamese")
    pub name: &'static str,

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all supported languages, canonical first.
    pub fn list(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Comma-separated list of supported codes, in registry order (e.g. "en, vi")
    pub fn supported_codes(&self) -> String {
        self.languages
            .iter()
            .map(|lang| lang.code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// English is canonical; Vietnamese is the only translation target.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            is_canonical: true,
        },
        LanguageConfig {
            code: "vi",
            name: "Vietnamese",
            is_canonical: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should exist");
        assert_eq!(config.name, "English");
        assert!(config.is_canonical);
    }

    #[test]
    fn test_get_by_code_vietnamese() {
        let config = LanguageRegistry::get()
            .get_by_code("vi")
            .expect("Vietnamese should exist");
        assert_eq!(config.name, "Vietnamese");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(LanguageRegistry::get().get_by_code("EN").is_none());
    }

    #[test]
    fn test_list() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list()
            .iter()
            .map(|lang| lang.code)
            .collect();
        assert_eq!(codes, vec!["en", "vi"]);
    }

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(LanguageRegistry::get().canonical().code, "en");
    }

    #[test]
    fn test_supported_codes() {
        assert_eq!(LanguageRegistry::get().supported_codes(), "en, vi");
    }
}

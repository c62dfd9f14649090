//! Translation table completeness checks.
//!
//! Compares every non-canonical language against the canonical one so
//! a page rendered in Vietnamese never falls back to raw keys.

use crate::i18n::{Language, LanguageRegistry, SeedEntry};
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about a translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys missing from a translation (language code, key)
    pub errors: Vec<String>,

    /// Keys only present in a translation, or empty values
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for seeded translation tables.
pub struct SeedValidator;

impl SeedValidator {
    /// Validate a translation table against the canonical language.
    ///
    /// - every canonical key must exist in each translation (error)
    /// - keys absent from the canonical language are flagged (warning)
    /// - empty values are flagged (warning)
    pub fn validate(entries: &[SeedEntry]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical = Language::canonical();
        let canonical_keys = Self::keys_for(entries, canonical);

        for config in LanguageRegistry::get().list() {
            if config.is_canonical {
                continue;
            }
            let Ok(lang) = Language::from_code(config.code) else {
                continue;
            };
            let keys = Self::keys_for(entries, lang);

            for missing in canonical_keys.difference(&keys) {
                report
                    .errors
                    .push(format!("Missing key '{}' for language '{}'", missing, lang));
            }
            for extra in keys.difference(&canonical_keys) {
                report.warnings.push(format!(
                    "Key '{}' for language '{}' has no '{}' counterpart",
                    extra, lang, canonical
                ));
            }
        }

        for entry in entries.iter().filter(|e| e.value.trim().is_empty()) {
            report.warnings.push(format!(
                "Empty value for key '{}' in language '{}'",
                entry.key, entry.lang
            ));
        }

        report
    }

    fn keys_for(entries: &[SeedEntry], lang: Language) -> BTreeSet<&'static str> {
        entries
            .iter()
            .filter(|e| e.lang == lang)
            .map(|e| e.key)
            .collect()
    }
}

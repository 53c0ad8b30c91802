//! Structured multilingual text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lang::Language;

/// A piece of text with one variant per language.
///
/// Lookup falls back to English, then to the first available variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText {
    variants: BTreeMap<Language, String>,
}

impl LocalizedText {
    /// Empty text (every lookup yields `""`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Text without translations, shown as-is for every language.
    pub fn single(text: impl Into<String>) -> Self {
        Self::new().with(Language::En, text)
    }

    /// Japanese / English / French triple.
    pub fn triple(ja: impl Into<String>, en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self::new()
            .with(Language::Ja, ja)
            .with(Language::En, en)
            .with(Language::Fr, fr)
    }

    /// Add or replace the variant for `lang`.
    pub fn with(mut self, lang: Language, text: impl Into<String>) -> Self {
        self.variants.insert(lang, text.into());
        self
    }

    /// Variant for `lang`, with fallback.
    pub fn get(&self, lang: Language) -> &str {
        self.variants
            .get(&lang)
            .or_else(|| self.variants.get(&Language::En))
            .or_else(|| self.variants.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Variant for `lang` without fallback.
    pub fn exact(&self, lang: Language) -> Option<&str> {
        self.variants.get(&lang).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.variants.values().all(|v| v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_exact_variant() {
        let text = LocalizedText::triple("コメント", "Comment", "Commentaire");
        assert_eq!(text.get(Language::Ja), "コメント");
        assert_eq!(text.get(Language::En), "Comment");
        assert_eq!(text.get(Language::Fr), "Commentaire");
    }

    #[test]
    fn test_missing_variant_falls_back_to_english() {
        let text = LocalizedText::new()
            .with(Language::Ja, "明瞭性")
            .with(Language::En, "Clarity");
        assert_eq!(text.get(Language::Fr), "Clarity");
        assert_eq!(text.exact(Language::Fr), None);
    }

    #[test]
    fn test_single_is_language_independent() {
        let text = LocalizedText::single("v1.2");
        for lang in Language::ALL {
            assert_eq!(text.get(lang), "v1.2");
        }
    }

    #[test]
    fn test_empty_yields_empty_string() {
        let text = LocalizedText::new();
        assert_eq!(text.get(Language::Ja), "");
        assert!(text.is_empty());
    }

    #[test]
    fn test_without_english_uses_first_variant() {
        let text = LocalizedText::new().with(Language::Fr, "Sécurité");
        assert_eq!(text.get(Language::Ja), "Sécurité");
    }
}

//! Supported display languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A display language supported by the client and the scoring backend.
///
/// Declaration order is the positional order of three-variant labels
/// (`ja / en / fr`) and drives `Ord`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ja,
    #[default]
    En,
    Fr,
}

impl Language {
    /// All supported languages in positional order.
    pub const ALL: [Language; 3] = [Language::Ja, Language::En, Language::Fr];

    /// Wire code sent as the `lang` request field.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Parse a language code (case-insensitive, tolerant of region tags).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let lowered = value.to_ascii_lowercase();
        let primary = lowered.split(['-', '_']).next().unwrap_or("");
        match primary {
            "ja" => Some(Self::Ja),
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Next language for the single cycling toggle button.
    pub const fn next(self) -> Self {
        match self {
            Self::Ja => Self::En,
            Self::En => Self::Fr,
            Self::Fr => Self::Ja,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unsupported language: {s} (use ja|en|fr)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_and_region_tags() {
        assert_eq!(Language::parse("ja"), Some(Language::Ja));
        assert_eq!(Language::parse(" EN "), Some(Language::En));
        assert_eq!(Language::parse("fr-CA"), Some(Language::Fr));
        assert_eq!(Language::parse("ja_JP"), Some(Language::Ja));
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut lang = Language::Ja;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(lang);
            lang = lang.next();
        }
        assert_eq!(seen, Language::ALL.to_vec());
        assert_eq!(lang, Language::Ja);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Language::Fr).unwrap();
        assert_eq!(json, "\"fr\"");
        let back: Language = serde_json::from_str("\"ja\"").unwrap();
        assert_eq!(back, Language::Ja);
    }
}

//! Locale resolution for multilingual encoded strings.
//!
//! Older pages and backend messages embed several language variants in one
//! string. Two encodings exist:
//!
//! - slash-delimited: `"コメント / Comment / Commentaire"` (three variants in
//!   `ja / en / fr` order) or `"採点中… / Scoring in progress…"` (two variants,
//!   sides told apart by script);
//! - parenthetical: `"Clarity（明瞭性）"` with full-width parentheses, the
//!   inside being Japanese and the outside English.
//!
//! [`parse`] turns such a string into a [`LocalizedText`] and [`resolve`]
//! picks the variant for a language. Both are pure; callers decide where the
//! resolved text goes.

use std::borrow::Cow;

use crate::catalog::{self, Message};
use crate::label::LocalizedText;
use crate::lang::Language;

const SLASH_SEPARATOR: &str = " / ";
const OPEN_PAREN: char = '（';
const CLOSE_PAREN: char = '）';

/// Whole-string translations that win over both encodings.
const OVERRIDES: [(&str, Message); 7] = [
    (
        "プロンプトを入力してください。 / Enter your prompt.",
        Message::EnterPrompt,
    ),
    (
        "サーバー側でエラーが発生しました。 / Server returned an error.",
        Message::ServerError,
    ),
    (
        "通信エラーが発生しました。 / Network error occurred.",
        Message::NetworkError,
    ),
    ("Scoring in progress… / 採点中…", Message::Loading),
    ("スコア結果 / Score Results", Message::ResultHeading),
    ("Debug: raw JSON", Message::RawJson),
    ("(No English commentary provided.)", Message::NoComment),
];

/// Resolve `text` to its variant for `lang`.
///
/// Strings that match no encoding are returned unchanged, so resolving an
/// already resolved string is a no-op.
pub fn resolve(text: &str, lang: Language) -> Cow<'_, str> {
    match parse(text) {
        Some(localized) => Cow::Owned(localized.get(lang).to_string()),
        None => Cow::Borrowed(text),
    }
}

/// Resolve every line of a multi-line fragment independently.
pub fn resolve_lines(text: &str, lang: Language) -> String {
    text.split('\n')
        .map(|line| resolve(line, lang))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode an encoded string into its variants.
///
/// Returns `None` when the string carries no recognised encoding.
pub fn parse(text: &str) -> Option<LocalizedText> {
    let trimmed = text.trim();
    if let Some(localized) = lookup_override(trimmed) {
        return Some(localized);
    }
    parse_slash(trimmed).or_else(|| parse_parenthetical(trimmed))
}

fn lookup_override(text: &str) -> Option<LocalizedText> {
    OVERRIDES
        .iter()
        .find(|(key, _)| *key == text)
        .map(|(_, message)| catalog::message(*message))
}

fn parse_slash(text: &str) -> Option<LocalizedText> {
    if !text.contains(SLASH_SEPARATOR) {
        return None;
    }
    let parts: Vec<&str> = text.split(SLASH_SEPARATOR).map(str::trim).collect();
    // A variant must be final text: resolving it again has to be a no-op.
    if parts
        .iter()
        .any(|p| p.is_empty() || parse_parenthetical(p).is_some())
    {
        return None;
    }

    match parts.as_slice() {
        [ja, en, fr] => Some(LocalizedText::triple(*ja, *en, *fr)),
        [left, right] => {
            let (ja, en) = if contains_japanese(right) && !contains_japanese(left) {
                (*right, *left)
            } else {
                (*left, *right)
            };
            Some(LocalizedText::new().with(Language::Ja, ja).with(Language::En, en))
        }
        _ => None,
    }
}

fn parse_parenthetical(text: &str) -> Option<LocalizedText> {
    let inner = text.strip_suffix(CLOSE_PAREN)?;
    let open = inner.rfind(OPEN_PAREN)?;
    let outside = inner[..open].trim();
    let inside = inner[open + OPEN_PAREN.len_utf8()..].trim();
    if outside.is_empty() || inside.is_empty() {
        return None;
    }
    // Japanese inside, non-Japanese outside. `コメント（日本語）` is a
    // Japanese heading, not an encoded pair.
    if contains_japanese(outside) || !contains_japanese(inside) {
        return None;
    }

    let french = catalog::french_for(outside).unwrap_or(outside);
    Some(LocalizedText::triple(inside, outside, french))
}

/// Script scan used to tell the Japanese side of a two-variant label.
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{3000}'..='\u{303F}'   // CJK symbols and punctuation
            | '\u{3040}'..='\u{309F}' // Hiragana
            | '\u{30A0}'..='\u{30FF}' // Katakana
            | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
            | '\u{FF00}'..='\u{FFEF}' // Half-width and full-width forms
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_variants_are_positional() {
        let label = "コメント / Comment / Commentaire";
        assert_eq!(resolve(label, Language::Fr), "Commentaire");
        assert_eq!(resolve(label, Language::Ja), "コメント");
        assert_eq!(resolve(label, Language::En), "Comment");
    }

    #[test]
    fn test_parenthetical() {
        let label = "Clarity（明瞭性）";
        assert_eq!(resolve(label, Language::Ja), "明瞭性");
        assert_eq!(resolve(label, Language::En), "Clarity");
        assert_eq!(resolve(label, Language::Fr), "Clarté");
    }

    #[test]
    fn test_parenthetical_without_french_entry_uses_outside() {
        assert_eq!(resolve("Tone（口調）", Language::Fr), "Tone");
    }

    #[test]
    fn test_half_width_parentheses_are_not_a_delimiter() {
        let label = "Clarity (明瞭性)";
        assert_eq!(resolve(label, Language::Ja), label);
    }

    #[test]
    fn test_resolved_strings_are_unchanged() {
        for lang in Language::ALL {
            assert_eq!(resolve("Clarity", lang), "Clarity");
            assert_eq!(resolve("明瞭性", lang), "明瞭性");
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let labels = [
            "コメント / Comment / Commentaire",
            "Clarity（明瞭性）",
            "採点中 / Scoring",
            "Overall（総合評価）",
            "コメント（日本語）",
            "コメント（日本語） / Comment (English)",
            "Comment (English) / コメント（日本語）",
        ];
        for label in labels {
            for lang in Language::ALL {
                let once = resolve(label, lang).into_owned();
                let twice = resolve(&once, lang).into_owned();
                assert_eq!(once, twice, "{label} / {lang}");
                assert!(!once.contains(SLASH_SEPARATOR));
            }
        }
    }

    #[test]
    fn test_japanese_heading_with_parenthetical_is_not_encoded() {
        for lang in Language::ALL {
            assert_eq!(resolve("コメント（日本語）", lang), "コメント（日本語）");
            assert_eq!(resolve("Prompt（draft）", lang), "Prompt（draft）");
        }
    }

    #[test]
    fn test_slash_variant_with_parenthetical_stays_whole() {
        let label = "コメント（日本語） / Comment (English)";
        assert_eq!(resolve(label, Language::Ja), "コメント（日本語）");
        assert_eq!(resolve(label, Language::En), "Comment (English)");

        // An encoded pair inside a variant disqualifies the slash reading
        let nested = "Clarity（明瞭性） / Clarté";
        assert!(parse_slash(nested).is_none());
    }

    #[test]
    fn test_two_variants_detect_japanese_side() {
        let label = "Score Results / スコア";
        assert_eq!(resolve(label, Language::Ja), "スコア");
        assert_eq!(resolve(label, Language::En), "Score Results");
        // French falls back to the English side
        assert_eq!(resolve(label, Language::Fr), "Score Results");
    }

    #[test]
    fn test_two_variants_inconclusive_scan_assumes_left_is_japanese() {
        let label = "left / right";
        assert_eq!(resolve(label, Language::Ja), "left");
        assert_eq!(resolve(label, Language::En), "right");
    }

    #[test]
    fn test_override_wins_over_encoding() {
        let banner = "サーバー側でエラーが発生しました。 / Server returned an error.";
        assert_eq!(
            resolve(banner, Language::Fr),
            "Le serveur a renvoyé une erreur."
        );
        assert_eq!(
            resolve("Scoring in progress… / 採点中…", Language::Ja),
            "採点中…"
        );
    }

    #[test]
    fn test_override_for_plain_string() {
        assert_eq!(resolve("Debug: raw JSON", Language::Fr), "Débogage : JSON brut");
    }

    #[test]
    fn test_unencoded_strings_pass_through() {
        assert_eq!(resolve("a/b", Language::Ja), "a/b");
        assert_eq!(resolve("one / two / three / four", Language::En), "one / two / three / four");
        assert_eq!(resolve("", Language::Fr), "");
    }

    #[test]
    fn test_resolve_lines() {
        let fragment = "Clarity（明瞭性）\n82\nコメント / Comment / Commentaire";
        assert_eq!(resolve_lines(fragment, Language::Ja), "明瞭性\n82\nコメント");
    }

    #[test]
    fn test_contains_japanese() {
        assert!(contains_japanese("採点"));
        assert!(contains_japanese("カタカナ"));
        assert!(contains_japanese("ひらがな"));
        assert!(!contains_japanese("Clarté"));
    }
}

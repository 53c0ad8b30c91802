//! Response normalization.
//!
//! The scoring backend has shipped several response shapes over time: flat
//! or wrapped under `scores`, lower-case or capitalized keys, with or without
//! `overall`, with or without the French fields. [`normalize`] maps all of
//! them onto one [`ViewModel`] and never fails. Anything it had to fill in is
//! reported through [`Completeness`] so the leniency stays observable.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::label::LocalizedText;
use crate::lang::Language;

/// One of the five quality axes returned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Clarity,
    Specificity,
    Constraints,
    Intent,
    Safety,
}

impl Dimension {
    /// Display order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Clarity,
        Dimension::Specificity,
        Dimension::Constraints,
        Dimension::Intent,
        Dimension::Safety,
    ];

    /// Lower-case payload key (takes precedence).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Clarity => "clarity",
            Self::Specificity => "specificity",
            Self::Constraints => "constraints",
            Self::Intent => "intent",
            Self::Safety => "safety",
        }
    }

    /// Capitalized payload key.
    pub const fn capitalized_key(self) -> &'static str {
        match self {
            Self::Clarity => "Clarity",
            Self::Specificity => "Specificity",
            Self::Constraints => "Constraints",
            Self::Intent => "Intent",
            Self::Safety => "Safety",
        }
    }
}

/// Colour band of a score: `<= 39` low, `<= 79` mid, otherwise high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Mid,
    High,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score <= 39.0 {
            Self::Low
        } else if score <= 79.0 {
            Self::Mid
        } else {
            Self::High
        }
    }
}

/// Normalized scoring result. Immutable once built; one per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    clarity: f64,
    specificity: f64,
    constraints: f64,
    intent: f64,
    safety: f64,
    overall: f64,
    overall_derived: bool,
    comment: LocalizedText,
    improved_prompt: LocalizedText,
    raw: Value,
}

impl ViewModel {
    pub fn score(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Clarity => self.clarity,
            Dimension::Specificity => self.specificity,
            Dimension::Constraints => self.constraints,
            Dimension::Intent => self.intent,
            Dimension::Safety => self.safety,
        }
    }

    /// Dimensions with their scores, in display order.
    pub fn dimensions(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.score(d)))
    }

    pub fn overall(&self) -> f64 {
        self.overall
    }

    /// True when `overall` was computed locally from the dimensions.
    pub fn overall_derived(&self) -> bool {
        self.overall_derived
    }

    /// Backend commentary in `lang` (empty when the backend sent none).
    pub fn comment(&self, lang: Language) -> &str {
        self.comment.get(lang)
    }

    /// Improved prompt suggestion in `lang` (empty when the backend sent none).
    pub fn improved_prompt(&self, lang: Language) -> &str {
        self.improved_prompt.get(lang)
    }

    /// Original payload, kept for diagnostics only.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Whether the payload populated every field the view model reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completeness {
    Complete,
    /// Fields that were absent or malformed and got a default.
    Partial { defaulted: Vec<&'static str> },
}

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub view: ViewModel,
    pub completeness: Completeness,
}

impl Normalized {
    pub fn is_complete(&self) -> bool {
        matches!(self.completeness, Completeness::Complete)
    }

    pub fn defaulted(&self) -> &[&'static str] {
        match &self.completeness {
            Completeness::Complete => &[],
            Completeness::Partial { defaulted } => defaulted,
        }
    }
}

/// `Math.round` semantics: halves round toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

const TEXT_FIELDS: [(&str, &[&str]); 6] = [
    ("comment_ja", &["comment_ja", "comment"]),
    ("comment_en", &["comment_en"]),
    ("comment_fr", &["comment_fr"]),
    ("improved_prompt_ja", &["improved_prompt_ja"]),
    ("improved_prompt_en", &["improved_prompt_en"]),
    ("improved_prompt_fr", &["improved_prompt_fr"]),
];

enum Lookup<T> {
    Found(T),
    Missing,
    Malformed,
}

/// Map a decoded backend payload onto a [`ViewModel`].
pub fn normalize(raw: &Value) -> Normalized {
    let empty = Map::new();
    let top = raw.as_object().unwrap_or(&empty);
    let root = top
        .get("scores")
        .and_then(Value::as_object)
        .unwrap_or(top);

    let mut defaulted: Vec<&'static str> = Vec::new();
    let mut dimension_defaulted = false;

    let mut scores = [0.0_f64; 5];
    for (slot, dimension) in scores.iter_mut().zip(Dimension::ALL) {
        *slot = match lookup_number(root, &[dimension.key(), dimension.capitalized_key()]) {
            Lookup::Found(v) => v,
            Lookup::Missing | Lookup::Malformed => {
                defaulted.push(dimension.key());
                dimension_defaulted = true;
                0.0
            }
        };
    }

    let (overall, overall_derived) = match lookup_number(root, &["overall", "Overall"]) {
        Lookup::Found(v) => (v, false),
        Lookup::Missing | Lookup::Malformed => {
            defaulted.push("overall");
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            (round_half_up(mean), true)
        }
    };

    let sources: Vec<&Map<String, Value>> = if std::ptr::eq(root, top) {
        vec![top]
    } else {
        vec![top, root]
    };

    let mut texts: Vec<String> = Vec::with_capacity(TEXT_FIELDS.len());
    for (name, keys) in TEXT_FIELDS {
        match lookup_text(&sources, keys) {
            Lookup::Found(text) => texts.push(text),
            Lookup::Missing | Lookup::Malformed => {
                defaulted.push(name);
                texts.push(String::new());
            }
        }
    }
    let mut texts = texts.into_iter();
    let mut next_text = || texts.next().unwrap_or_default();
    let comment = LocalizedText::new()
        .with(Language::Ja, next_text())
        .with(Language::En, next_text())
        .with(Language::Fr, next_text());
    let improved_prompt = LocalizedText::new()
        .with(Language::Ja, next_text())
        .with(Language::En, next_text())
        .with(Language::Fr, next_text());

    let completeness = if defaulted.is_empty() {
        Completeness::Complete
    } else if dimension_defaulted {
        warn!(fields = ?defaulted, "score payload incomplete; defaults applied");
        Completeness::Partial { defaulted }
    } else {
        debug!(fields = ?defaulted, "score payload partially populated");
        Completeness::Partial { defaulted }
    };

    let [clarity, specificity, constraints, intent, safety] = scores;
    Normalized {
        view: ViewModel {
            clarity,
            specificity,
            constraints,
            intent,
            safety,
            overall,
            overall_derived,
            comment,
            improved_prompt,
            raw: raw.clone(),
        },
        completeness,
    }
}

/// First non-null value among `keys`, coerced to a finite number.
fn lookup_number(obj: &Map<String, Value>, keys: &[&str]) -> Lookup<f64> {
    let Some(value) = keys
        .iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
    else {
        return Lookup::Missing;
    };

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Lookup::Found(n),
        _ => Lookup::Malformed,
    }
}

fn lookup_text(sources: &[&Map<String, Value>], keys: &[&str]) -> Lookup<String> {
    let value = keys
        .iter()
        .flat_map(|k| sources.iter().filter_map(move |s| s.get(*k)))
        .find(|v| !v.is_null());

    match value {
        None => Lookup::Missing,
        Some(Value::String(s)) => Lookup::Found(s.clone()),
        Some(_) => Lookup::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "clarity": 80,
            "specificity": 60,
            "constraints": 70,
            "intent": 90,
            "safety": 50,
            "overall": 72,
            "comment_ja": "良い点: 明確です。",
            "comment_en": "Strength: clear.",
            "comment_fr": "Point fort : clair.",
            "improved_prompt_ja": "改善版",
            "improved_prompt_en": "Improved",
            "improved_prompt_fr": "Amélioré"
        })
    }

    #[test]
    fn test_complete_payload() {
        let normalized = normalize(&full_payload());
        assert!(normalized.is_complete());
        let view = &normalized.view;
        assert_eq!(view.score(Dimension::Clarity), 80.0);
        assert_eq!(view.overall(), 72.0);
        assert!(!view.overall_derived());
        assert_eq!(view.comment(Language::Fr), "Point fort : clair.");
        assert_eq!(view.improved_prompt(Language::Ja), "改善版");
        assert_eq!(view.raw(), &full_payload());
    }

    #[test]
    fn test_overall_is_rounded_mean_when_absent() {
        let raw = json!({
            "clarity": 80, "specificity": 60, "constraints": 70, "intent": 90, "safety": 50
        });
        let normalized = normalize(&raw);
        assert_eq!(normalized.view.overall(), 70.0);
        assert!(normalized.view.overall_derived());
        assert!(normalized.defaulted().contains(&"overall"));
    }

    #[test]
    fn test_missing_dimensions_default_to_zero() {
        let raw = json!({ "clarity": 90, "intent": 60 });
        let normalized = normalize(&raw);
        let view = &normalized.view;
        assert_eq!(view.score(Dimension::Specificity), 0.0);
        assert_eq!(view.score(Dimension::Constraints), 0.0);
        assert_eq!(view.score(Dimension::Safety), 0.0);
        // (90 + 0 + 0 + 60 + 0) / 5 = 30
        assert_eq!(view.overall(), 30.0);
        let defaulted = normalized.defaulted();
        assert!(defaulted.contains(&"specificity"));
        assert!(defaulted.contains(&"constraints"));
        assert!(defaulted.contains(&"safety"));
        assert!(!defaulted.contains(&"clarity"));
    }

    #[test]
    fn test_capitalized_overall_used_verbatim() {
        let raw = json!({
            "Clarity": 10, "Specificity": 10, "Constraints": 10, "Intent": 10, "Safety": 10,
            "Overall": 88.5
        });
        let view = normalize(&raw).view;
        assert_eq!(view.score(Dimension::Clarity), 10.0);
        assert_eq!(view.overall(), 88.5);
        assert!(!view.overall_derived());
    }

    #[test]
    fn test_lower_case_takes_precedence() {
        let raw = json!({ "clarity": 40, "Clarity": 99, "overall": 1, "Overall": 2 });
        let view = normalize(&raw).view;
        assert_eq!(view.score(Dimension::Clarity), 40.0);
        assert_eq!(view.overall(), 1.0);
    }

    #[test]
    fn test_null_falls_through_to_capitalized() {
        let raw = json!({ "clarity": null, "Clarity": 55 });
        assert_eq!(normalize(&raw).view.score(Dimension::Clarity), 55.0);
    }

    #[test]
    fn test_scores_wrapper() {
        let raw = json!({
            "scores": {
                "clarity": 80, "specificity": 60, "constraints": 70, "intent": 90, "safety": 50
            },
            "comment": "legacy comment",
            "comment_en": "english"
        });
        let normalized = normalize(&raw);
        let view = &normalized.view;
        assert_eq!(view.score(Dimension::Intent), 90.0);
        assert_eq!(view.overall(), 70.0);
        assert_eq!(view.comment(Language::Ja), "legacy comment");
        assert_eq!(view.comment(Language::En), "english");
    }

    #[test]
    fn test_text_fields_inside_scores_wrapper_are_found() {
        let raw = json!({ "scores": { "clarity": 1, "comment_fr": "dedans" } });
        assert_eq!(normalize(&raw).view.comment(Language::Fr), "dedans");
    }

    #[test]
    fn test_non_object_scores_is_ignored() {
        let raw = json!({ "scores": 5, "clarity": 42 });
        assert_eq!(normalize(&raw).view.score(Dimension::Clarity), 42.0);
    }

    #[test]
    fn test_comment_ja_prefers_specific_field() {
        let raw = json!({ "comment_ja": "専用", "comment": "generic" });
        assert_eq!(normalize(&raw).view.comment(Language::Ja), "専用");
    }

    #[test]
    fn test_text_fields_default_to_empty() {
        let normalized = normalize(&json!({}));
        let view = &normalized.view;
        for lang in Language::ALL {
            assert_eq!(view.comment(lang), "");
            assert_eq!(view.improved_prompt(lang), "");
        }
        assert_eq!(view.overall(), 0.0);
    }

    #[test]
    fn test_malformed_payload_never_fails() {
        let normalized = normalize(&json!(["not", "an", "object"]));
        assert_eq!(normalized.view.overall(), 0.0);
        assert!(!normalized.is_complete());

        let normalized = normalize(&json!({ "clarity": "high", "comment_en": 12 }));
        assert_eq!(normalized.view.score(Dimension::Clarity), 0.0);
        assert_eq!(normalized.view.comment(Language::En), "");
        assert!(normalized.defaulted().contains(&"clarity"));
        assert!(normalized.defaulted().contains(&"comment_en"));
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let raw = json!({ "clarity": " 75 " });
        assert_eq!(normalize(&raw).view.score(Dimension::Clarity), 75.0);
    }

    #[test]
    fn test_round_half_up_policy() {
        assert_eq!(round_half_up(70.4), 70.0);
        assert_eq!(round_half_up(70.5), 71.0);
        assert_eq!(round_half_up(70.6), 71.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
    }

    #[test]
    fn test_mean_with_half_rounds_up() {
        let raw = json!({
            "clarity": 70.5, "specificity": 70.5, "constraints": 70.5, "intent": 70.5, "safety": 70.5
        });
        assert_eq!(normalize(&raw).view.overall(), 71.0);

        // 353 / 5 = 70.6
        let raw = json!({
            "clarity": 80, "specificity": 60, "constraints": 70, "intent": 90, "safety": 53
        });
        assert_eq!(normalize(&raw).view.overall(), 71.0);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::of(0.0), ScoreBand::Low);
        assert_eq!(ScoreBand::of(39.0), ScoreBand::Low);
        assert_eq!(ScoreBand::of(40.0), ScoreBand::Mid);
        assert_eq!(ScoreBand::of(79.0), ScoreBand::Mid);
        assert_eq!(ScoreBand::of(80.0), ScoreBand::High);
        assert_eq!(ScoreBand::of(100.0), ScoreBand::High);
    }

    #[test]
    fn test_dimensions_in_display_order() {
        let view = normalize(&full_payload()).view;
        let order: Vec<Dimension> = view.dimensions().map(|(d, _)| d).collect();
        assert_eq!(order, Dimension::ALL.to_vec());
    }
}

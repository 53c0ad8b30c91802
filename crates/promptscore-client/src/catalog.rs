//! UI label catalog.
//!
//! Every user-facing label is declared here once with all of its variants.
//! Renderers look labels up by key instead of parsing encoded strings.

use crate::label::LocalizedText;
use crate::normalize::Dimension;

/// Catalog keys for non-dimension labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ResultHeading,
    CommentHeading,
    ImprovedPromptHeading,
    NoComment,
    NoImprovedPrompt,
    Loading,
    EnterPrompt,
    ServerError,
    NetworkError,
    Busy,
    RawJson,
    LanguageDropped,
    DisplayLanguage,
    HealthOk,
    HealthDegraded,
}

struct Entry {
    ja: &'static str,
    en: &'static str,
    fr: &'static str,
}

impl Entry {
    fn text(&self) -> LocalizedText {
        LocalizedText::triple(self.ja, self.en, self.fr)
    }
}

const fn entry(ja: &'static str, en: &'static str, fr: &'static str) -> Entry {
    Entry { ja, en, fr }
}

const CLARITY: Entry = entry("明瞭性", "Clarity", "Clarté");
const SPECIFICITY: Entry = entry("具体性", "Specificity", "Spécificité");
const CONSTRAINTS: Entry = entry("制約性", "Constraints", "Contraintes");
const INTENT: Entry = entry("意図性", "Intent", "Intention");
const SAFETY: Entry = entry("安全性", "Safety", "Sécurité");
const OVERALL: Entry = entry("総合評価", "Overall", "Score global");

const SCORE_LABELS: [&Entry; 6] = [
    &CLARITY,
    &SPECIFICITY,
    &CONSTRAINTS,
    &INTENT,
    &SAFETY,
    &OVERALL,
];

fn message_entry(message: Message) -> Entry {
    match message {
        Message::ResultHeading => entry("スコア結果", "Score Results", "Résultats"),
        Message::CommentHeading => entry("コメント", "Comment", "Commentaire"),
        Message::ImprovedPromptHeading => {
            entry("改善プロンプト", "Improved Prompt", "Prompt amélioré")
        }
        Message::NoComment => entry(
            "（コメントがありません）",
            "(No commentary provided.)",
            "(Aucun commentaire fourni.)",
        ),
        Message::NoImprovedPrompt => entry(
            "（改善プロンプトがありません）",
            "(No improved prompt provided.)",
            "(Aucun prompt amélioré fourni.)",
        ),
        Message::Loading => entry("採点中…", "Scoring in progress…", "Évaluation en cours…"),
        Message::EnterPrompt => entry(
            "プロンプトを入力してください。",
            "Enter your prompt.",
            "Veuillez saisir votre prompt.",
        ),
        Message::ServerError => entry(
            "サーバー側でエラーが発生しました。",
            "Server returned an error.",
            "Le serveur a renvoyé une erreur.",
        ),
        Message::NetworkError => entry(
            "通信エラーが発生しました。",
            "Network error occurred.",
            "Une erreur réseau est survenue.",
        ),
        Message::Busy => entry(
            "採点中です。完了までお待ちください。",
            "A scoring request is already in progress.",
            "Une évaluation est déjà en cours.",
        ),
        Message::RawJson => entry("デバッグ: 生のJSON", "Debug: raw JSON", "Débogage : JSON brut"),
        Message::LanguageDropped => entry(
            "バックエンドが言語指定を受け付けなかったため、言語指定なしで再送信しました。",
            "The backend rejected the language field; the request was retried without it.",
            "Le backend a refusé le champ de langue ; la requête a été renvoyée sans lui.",
        ),
        Message::DisplayLanguage => entry("表示言語", "Display language", "Langue d'affichage"),
        Message::HealthOk => entry(
            "バックエンドは正常です",
            "Backend is healthy",
            "Le backend est opérationnel",
        ),
        Message::HealthDegraded => entry(
            "バックエンドの状態が不明です",
            "Backend reported an unexpected status",
            "Le backend a signalé un état inattendu",
        ),
    }
}

/// Label for a score dimension.
pub fn dimension_label(dimension: Dimension) -> LocalizedText {
    match dimension {
        Dimension::Clarity => CLARITY.text(),
        Dimension::Specificity => SPECIFICITY.text(),
        Dimension::Constraints => CONSTRAINTS.text(),
        Dimension::Intent => INTENT.text(),
        Dimension::Safety => SAFETY.text(),
    }
}

/// Label for the overall score.
pub fn overall_label() -> LocalizedText {
    OVERALL.text()
}

/// Label for a catalog message.
pub fn message(message: Message) -> LocalizedText {
    message_entry(message).text()
}

/// French variant of a score label, keyed by its English text.
pub fn french_for(english: &str) -> Option<&'static str> {
    let english = english.trim();
    SCORE_LABELS
        .iter()
        .find(|e| e.en.eq_ignore_ascii_case(english))
        .map(|e| e.fr)
}

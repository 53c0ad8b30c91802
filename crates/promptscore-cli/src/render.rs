//! Output formatting for `promptscore score`.

use std::fmt::Write as _;

use promptscore_client::catalog::{self, Message};
use promptscore_client::{Failure, FailureKind, Language, ScoreBand, Scored, ViewModel};
use serde::Serialize;

/// Machine-readable report for `--format json`.
#[derive(Serialize)]
struct ScoreReport<'a> {
    lang: Language,
    complete: bool,
    defaulted: &'a [&'static str],
    attempts: u32,
    language_dropped: bool,
    result: &'a ViewModel,
}

/// Scores print without a fraction when they are whole numbers.
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

pub fn band_tag(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Low => "low",
        ScoreBand::Mid => "mid",
        ScoreBand::High => "high",
    }
}

fn score_line(out: &mut String, label: &str, value: f64) {
    let _ = writeln!(
        out,
        "  {label}: {} [{}]",
        format_score(value),
        band_tag(ScoreBand::of(value))
    );
}

fn section(out: &mut String, heading: Message, body: &str, placeholder: Message, lang: Language) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", catalog::message(heading).get(lang));
    if body.trim().is_empty() {
        let _ = writeln!(out, "{}", catalog::message(placeholder).get(lang));
    } else {
        let _ = writeln!(out, "{}", body.trim_end());
    }
}

/// Human-readable result in `lang`.
pub fn render_text(scored: &Scored, lang: Language, show_raw: bool) -> anyhow::Result<String> {
    let view = &scored.normalized.view;
    let mut out = String::new();

    let _ = writeln!(out, "{}", catalog::message(Message::ResultHeading).get(lang));
    for (dimension, value) in view.dimensions() {
        score_line(&mut out, catalog::dimension_label(dimension).get(lang), value);
    }
    score_line(&mut out, catalog::overall_label().get(lang), view.overall());

    section(
        &mut out,
        Message::CommentHeading,
        view.comment(lang),
        Message::NoComment,
        lang,
    );
    section(
        &mut out,
        Message::ImprovedPromptHeading,
        view.improved_prompt(lang),
        Message::NoImprovedPrompt,
        lang,
    );

    if show_raw {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", catalog::message(Message::RawJson).get(lang));
        let _ = writeln!(out, "{}", serde_json::to_string_pretty(view.raw())?);
    }

    Ok(out)
}

/// JSON report for `--format json`.
pub fn render_json(scored: &Scored, lang: Language) -> anyhow::Result<String> {
    let report = ScoreReport {
        lang,
        complete: scored.normalized.is_complete(),
        defaulted: scored.normalized.defaulted(),
        attempts: scored.attempts,
        language_dropped: scored.language_dropped,
        result: &scored.normalized.view,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Banner plus detail. A server body is printed exactly as received.
pub fn render_failure(failure: &Failure, lang: Language) -> String {
    let banner = failure.banner.get(lang);
    if failure.detail.is_empty() {
        return banner.to_string();
    }
    match failure.kind {
        FailureKind::Server { status } => format!("{banner} (HTTP {status})\n{}", failure.detail),
        FailureKind::Network => format!("{banner}\n{}", failure.detail),
    }
}

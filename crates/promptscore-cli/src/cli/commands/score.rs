use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::Context;
use promptscore_client::catalog::{self, Message};
use promptscore_client::{FailureKind, Orchestrator, OrchestratorConfig, Outcome, ScoreClient};

use super::{client_config, load_preference};
use crate::cli::args::{OutputFormat, ScoreArgs};
use crate::exit_codes::{INTERNAL_ERROR, INVALID_INPUT, NETWORK_ERROR, SERVER_ERROR, SUCCESS};
use crate::indicator::StderrIndicator;
use crate::render;

/// Prompt from the argument, `--file`, or piped stdin. An interactive
/// terminal counts as an empty prompt.
fn read_prompt(args: &ScoreArgs) -> anyhow::Result<String> {
    if let Some(prompt) = &args.prompt {
        return Ok(prompt.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read prompt from {}", path.display()));
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut prompt = String::new();
    stdin
        .lock()
        .read_to_string(&mut prompt)
        .context("failed to read prompt from stdin")?;
    Ok(prompt)
}

pub async fn run(args: ScoreArgs, config_dir: Option<PathBuf>) -> anyhow::Result<i32> {
    let config = client_config(args.api_url.clone(), config_dir);
    let preference = load_preference(&config)?;

    let display = args.lang.unwrap_or_else(|| preference.current());
    let request_lang = (!args.no_lang).then_some(display);
    let prompt = read_prompt(&args)?;

    let client = ScoreClient::new(&config)?;
    let indicator = StderrIndicator::new(args.format == OutputFormat::Text);
    let orchestrator = Orchestrator::new(client, indicator, OrchestratorConfig::from(&config));

    match orchestrator.submit(&prompt, request_lang).await {
        Outcome::Rejected(message) => {
            eprintln!("{}", message.get(display));
            Ok(INVALID_INPUT)
        }
        Outcome::Busy(message) => {
            eprintln!("{}", message.get(display));
            Ok(INTERNAL_ERROR)
        }
        Outcome::Scored(scored) => {
            if scored.language_dropped {
                eprintln!("{}", catalog::message(Message::LanguageDropped).get(display));
            }
            match args.format {
                OutputFormat::Text => print!("{}", render::render_text(&scored, display, args.show_raw)?),
                OutputFormat::Json => println!("{}", render::render_json(&scored, display)?),
            }
            Ok(SUCCESS)
        }
        Outcome::Failed(failure) => {
            eprintln!("{}", render::render_failure(&failure, display));
            Ok(match failure.kind {
                FailureKind::Server { .. } => SERVER_ERROR,
                FailureKind::Network => NETWORK_ERROR,
            })
        }
    }
}

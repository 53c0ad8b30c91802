use clap::{Parser, Subcommand, ValueEnum};
use promptscore_client::Language;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "promptscore",
    version,
    about = "Score prompts for clarity, specificity, constraints, intent and safety"
)]
pub struct Cli {
    /// Directory holding the persisted language preference
    #[arg(long, global = true, env = "PROMPTSCORE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send a prompt to the scoring API and render the result
    Score(ScoreArgs),
    /// Show or change the display language
    Lang(LangArgs),
    /// Check that the scoring API is reachable
    Health(HealthArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Prompt text (read from --file or stdin when omitted)
    pub prompt: Option<String>,

    /// Read the prompt from a file
    #[arg(long, conflicts_with = "prompt")]
    pub file: Option<PathBuf>,

    /// Language for this request (defaults to the saved preference)
    #[arg(long, value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Send the request without a `lang` field
    #[arg(long, conflicts_with = "lang")]
    pub no_lang: bool,

    /// API base URL (overrides PROMPTSCORE_API_URL / PROMPTSCORE_HOST)
    #[arg(long)]
    pub api_url: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Append the raw response payload
    #[arg(long)]
    pub show_raw: bool,
}

#[derive(Parser, Debug)]
pub struct LangArgs {
    #[command(subcommand)]
    pub cmd: Option<LangCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LangCommand {
    /// Print the current display language
    Show,
    /// Select a display language
    Set {
        #[arg(value_parser = parse_language)]
        lang: Language,
    },
    /// Cycle to the next language (ja → en → fr → ja)
    Toggle,
    /// Resolve an encoded label ("日本語 / English", "English（日本語）")
    Resolve {
        text: String,

        /// Resolve for this language instead of the saved preference
        #[arg(long, value_parser = parse_language)]
        lang: Option<Language>,
    },
}

#[derive(Parser, Debug)]
pub struct HealthArgs {
    /// API base URL (overrides PROMPTSCORE_API_URL / PROMPTSCORE_HOST)
    #[arg(long)]
    pub api_url: Option<String>,
}

fn parse_language(value: &str) -> Result<Language, String> {
    Language::parse(value).ok_or_else(|| format!("unsupported language '{value}' (expected ja, en or fr)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_score_args_parse() {
        let cli = Cli::try_parse_from([
            "promptscore",
            "score",
            "Write a haiku",
            "--lang",
            "FR",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.cmd {
            Command::Score(args) => {
                assert_eq!(args.prompt.as_deref(), Some("Write a haiku"));
                assert_eq!(args.lang, Some(Language::Fr));
                assert_eq!(args.format, OutputFormat::Json);
                assert!(!args.no_lang);
            }
            _ => panic!("expected score"),
        }
    }

    #[test]
    fn test_lang_and_no_lang_conflict() {
        let result = Cli::try_parse_from(["promptscore", "score", "p", "--lang", "ja", "--no-lang"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_language_rejected() {
        let result = Cli::try_parse_from(["promptscore", "lang", "set", "de"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_lang_defaults_to_show() {
        let cli = Cli::try_parse_from(["promptscore", "lang"]).unwrap();
        match cli.cmd {
            Command::Lang(args) => assert!(args.cmd.is_none()),
            _ => panic!("expected lang"),
        }
    }
}

use std::path::PathBuf;

use promptscore_client::{ClientConfig, FileStore, LanguagePreference};

use super::args::*;

pub mod health;
pub mod lang;
pub mod score;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Score(args) => score::run(args, cli.config_dir).await,
        Command::Lang(args) => lang::run(args, cli.config_dir),
        Command::Health(args) => health::run(args, cli.config_dir).await,
    }
}

/// Environment config with command-line overrides applied.
pub(crate) fn client_config(api_url: Option<String>, config_dir: Option<PathBuf>) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = api_url {
        config = config.with_url(url);
    }
    if let Some(dir) = config_dir {
        config = config.with_config_dir(dir);
    }
    config
}

pub(crate) fn load_preference(
    config: &ClientConfig,
) -> anyhow::Result<LanguagePreference<FileStore>> {
    let store = match &config.config_dir {
        Some(dir) => FileStore::in_dir(dir),
        None => FileStore::default_location()?,
    };
    tracing::debug!(path = %store.path().display(), "preference store");
    Ok(LanguagePreference::load(store)?)
}

use std::path::PathBuf;

use promptscore_client::catalog::{self, Message};
use promptscore_client::{ScoreClient, ScoreError};

use super::{client_config, load_preference};
use crate::cli::args::HealthArgs;
use crate::exit_codes::{SERVER_ERROR, SUCCESS};

pub async fn run(args: HealthArgs, config_dir: Option<PathBuf>) -> anyhow::Result<i32> {
    let config = client_config(args.api_url, config_dir);
    let lang = load_preference(&config)?.current();
    let client = ScoreClient::new(&config)?;

    match client.health().await {
        Ok(health) if health.is_ok() => {
            println!("{} ({})", catalog::message(Message::HealthOk).get(lang), config.url);
            Ok(SUCCESS)
        }
        Ok(health) => {
            eprintln!(
                "{}: {}",
                catalog::message(Message::HealthDegraded).get(lang),
                health.status
            );
            Ok(SERVER_ERROR)
        }
        Err(e) => {
            let banner = match e {
                ScoreError::Server { .. } => Message::ServerError,
                _ => Message::NetworkError,
            };
            eprintln!("{}\n{}", catalog::message(banner).get(lang), e);
            Ok(e.exit_code())
        }
    }
}

use std::path::PathBuf;

use promptscore_client::catalog::{self, Message};
use promptscore_client::{locale, Language};

use super::{client_config, load_preference};
use crate::cli::args::{LangArgs, LangCommand};
use crate::exit_codes::SUCCESS;

fn print_current(lang: Language) {
    println!(
        "{}: {}",
        catalog::message(Message::DisplayLanguage).get(lang),
        lang.code()
    );
}

pub fn run(args: LangArgs, config_dir: Option<PathBuf>) -> anyhow::Result<i32> {
    let config = client_config(None, config_dir);
    let mut preference = load_preference(&config)?;

    match args.cmd.unwrap_or(LangCommand::Show) {
        LangCommand::Show => print_current(preference.current()),
        LangCommand::Set { lang } => print_current(preference.set(lang)?),
        LangCommand::Toggle => print_current(preference.toggle()?),
        LangCommand::Resolve { text, lang } => {
            let lang = lang.unwrap_or_else(|| preference.current());
            println!("{}", locale::resolve_lines(&text, lang));
        }
    }

    Ok(SUCCESS)
}

//! Loading line on stderr.

use std::io::Write;

use promptscore_client::catalog::{self, Message};
use promptscore_client::{Language, LoadingIndicator};

/// Prints the localized "scoring in progress" line while a request runs.
///
/// Disabled for machine-readable output so stdout and stderr stay clean.
#[derive(Debug, Clone, Copy)]
pub struct StderrIndicator {
    enabled: bool,
}

impl StderrIndicator {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl LoadingIndicator for StderrIndicator {
    fn start(&self, lang: Language) {
        if !self.enabled {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "{}", catalog::message(Message::Loading).get(lang));
        let _ = stderr.flush();
    }

    fn finish(&self) {
        if self.enabled {
            eprintln!();
        }
    }
}

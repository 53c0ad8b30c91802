//! Wire types and client configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::endpoint::{resolve_api_base, PRODUCTION_API_BASE};
use crate::lang::Language;

/// Body of `POST /score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub prompt: String,

    /// Only sent when a language preference is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
}

impl ScoreRequest {
    pub fn new(prompt: impl Into<String>, lang: Option<Language>) -> Self {
        Self {
            prompt: prompt.into(),
            lang,
        }
    }

    /// Same request with the language field removed.
    pub fn without_lang(&self) -> Self {
        Self {
            prompt: self.prompt.clone(),
            lang: None,
        }
    }
}

/// Status and body of a backend response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Response from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.trim_end_matches('.').eq_ignore_ascii_case("ok")
    }
}

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the scoring API.
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Transport timeout in seconds. `None` leaves it to the network layer.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Minimum time the loading state is held, measured from request start.
    #[serde(default = "default_min_loading_ms")]
    pub min_loading_ms: u64,

    /// Pause after completion before results replace the loading state.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Directory of the preference store. `None` uses the platform default.
    #[serde(default)]
    pub config_dir: Option<PathBuf>,
}

fn default_api_url() -> String {
    PRODUCTION_API_BASE.to_string()
}

fn default_min_loading_ms() -> u64 {
    300
}

fn default_settle_ms() -> u64 {
    400
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_secs: None,
            min_loading_ms: default_min_loading_ms(),
            settle_ms: default_settle_ms(),
            config_dir: None,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `PROMPTSCORE_API_URL` | Explicit API base URL |
    /// | `PROMPTSCORE_HOST` | Host name used to pick the API base |
    /// | `PROMPTSCORE_TIMEOUT` | Transport timeout in seconds |
    /// | `PROMPTSCORE_MIN_LOADING_MS` | Loading floor |
    /// | `PROMPTSCORE_SETTLE_MS` | Post-completion pause |
    /// | `PROMPTSCORE_CONFIG_DIR` | Preference store directory |
    pub fn from_env() -> Self {
        let url = std::env::var("PROMPTSCORE_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                let host = std::env::var("PROMPTSCORE_HOST").unwrap_or_default();
                resolve_api_base(&host).to_string()
            });

        Self {
            url,
            timeout_secs: std::env::var("PROMPTSCORE_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok()),
            min_loading_ms: std::env::var("PROMPTSCORE_MIN_LOADING_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_min_loading_ms),
            settle_ms: std::env::var("PROMPTSCORE_SETTLE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_settle_ms),
            config_dir: std::env::var_os("PROMPTSCORE_CONFIG_DIR").map(PathBuf::from),
        }
    }

    /// Set the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the transport timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set the loading floor and the settle pause.
    pub fn with_timing(mut self, min_loading_ms: u64, settle_ms: u64) -> Self {
        self.min_loading_ms = min_loading_ms;
        self.settle_ms = settle_ms;
        self
    }

    /// Set the preference store directory.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn min_loading(&self) -> Duration {
        Duration::from_millis(self.min_loading_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

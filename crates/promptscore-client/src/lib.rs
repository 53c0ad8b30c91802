//! Client for the prompt scoring API.
//!
//! This crate implements everything between the user's prompt and the
//! rendered result, providing:
//!
//! - HTTP transport for `POST /score` and `GET /health`
//! - A one-shot compatibility retry for backends that reject `lang`
//! - Normalization of every known response shape into one view model
//! - Structured multilingual labels and a resolver for encoded label strings
//! - A single-flight request orchestrator with a minimum loading time
//! - A persisted language preference behind a small key-value store
//!
//! # Quick Start
//!
//! ```no_run
//! use promptscore_client::{
//!     ClientConfig, Language, NoopIndicator, Orchestrator, OrchestratorConfig, Outcome,
//!     ScoreClient,
//! };
//!
//! # async fn example() -> Result<(), promptscore_client::ScoreError> {
//! let config = ClientConfig::from_env();
//! let client = ScoreClient::new(&config)?;
//! let orchestrator = Orchestrator::new(client, NoopIndicator, OrchestratorConfig::from(&config));
//!
//! if let Outcome::Scored(scored) = orchestrator.submit("Summarize this article", Some(Language::Ja)).await {
//!     println!("overall: {}", scored.normalized.view.overall());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `PROMPTSCORE_API_URL` | API base URL (default: derived from `PROMPTSCORE_HOST`) |
//! | `PROMPTSCORE_HOST` | Host name; loopback names select `http://127.0.0.1:8000` |
//! | `PROMPTSCORE_TIMEOUT` | Transport timeout in seconds (default: none) |
//! | `PROMPTSCORE_MIN_LOADING_MS` | Minimum loading time (default: 300) |
//! | `PROMPTSCORE_SETTLE_MS` | Pause before showing results (default: 400) |
//! | `PROMPTSCORE_CONFIG_DIR` | Preference store directory |

pub mod catalog;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod label;
pub mod lang;
pub mod locale;
pub mod normalize;
pub mod orchestrator;
pub mod store;
pub mod types;

// Re-export main types
pub use client::{HttpTransport, RetryPolicy, ScoreClient, Scored, Transport};
pub use error::{ScoreError, ScoreResult};
pub use label::LocalizedText;
pub use lang::Language;
pub use normalize::{normalize, Completeness, Dimension, Normalized, ScoreBand, ViewModel};
pub use orchestrator::{
    Failure, FailureKind, LoadingIndicator, NoopIndicator, Orchestrator, OrchestratorConfig,
    Outcome, Phase,
};
pub use store::{FileStore, LanguagePreference, MemoryStore, PreferenceStore};
pub use types::{ClientConfig, HealthStatus, HttpReply, ScoreRequest};

/// User agent sent with every request.
pub const CLIENT_USER_AGENT: &str = client::USER_AGENT_VALUE;

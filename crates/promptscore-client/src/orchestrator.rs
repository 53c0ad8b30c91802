//! Request orchestration: `Idle → Loading → (Succeeded | Failed)`.
//!
//! One request is in flight at a time. The submit control is disabled for
//! the whole submission and re-enabled by a drop guard on every path.
//! Suspension points are the network round trip, the loading floor and the
//! settle pause. Requests cannot be cancelled once issued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::catalog::{self, Message};
use crate::client::{ScoreClient, Scored, Transport};
use crate::error::ScoreError;
use crate::label::LocalizedText;
use crate::lang::Language;
use crate::types::{ClientConfig, ScoreRequest};

/// Orchestrator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Loading visuals. Purely decorative; the state machine never depends on it.
pub trait LoadingIndicator: Send + Sync {
    fn start(&self, lang: Language);
    fn finish(&self);
}

/// Indicator that shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopIndicator;

impl LoadingIndicator for NoopIndicator {
    fn start(&self, _lang: Language) {}
    fn finish(&self) {}
}

/// Timing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Minimum time in `Loading`, measured from request start.
    pub min_loading: Duration,

    /// Pause after a successful response before results are handed out.
    pub settle: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            min_loading: Duration::from_millis(300),
            settle: Duration::from_millis(400),
        }
    }
}

impl From<&ClientConfig> for OrchestratorConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            min_loading: config.min_loading(),
            settle: config.settle(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-2xx status.
    Server { status: u16 },
    /// Transport failure or undecodable body.
    Network,
}

/// A failed submission, ready for display.
#[derive(Debug, Clone)]
pub struct Failure {
    pub kind: FailureKind,
    pub banner: LocalizedText,
    /// Server body verbatim, or the transport error text.
    pub detail: String,
}

impl Failure {
    fn from_error(err: ScoreError) -> Self {
        match err {
            ScoreError::Server { status, body } => Self {
                kind: FailureKind::Server { status },
                banner: catalog::message(Message::ServerError),
                detail: body,
            },
            other => Self {
                kind: FailureKind::Network,
                banner: catalog::message(Message::NetworkError),
                detail: other.to_string(),
            },
        }
    }
}

/// Result of one submit action.
#[derive(Debug)]
pub enum Outcome {
    /// Empty prompt; nothing was sent.
    Rejected(LocalizedText),
    /// The control was disabled; nothing was sent.
    Busy(LocalizedText),
    Scored(Scored),
    Failed(Failure),
}

/// Re-enables the submit control when dropped. A submission abandoned while
/// `Loading` (its future dropped) falls back to `Idle`.
struct SubmitGuard<'a> {
    enabled: &'a AtomicBool,
    phase: &'a Mutex<Phase>,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        let mut phase = self.phase.lock().unwrap_or_else(|e| e.into_inner());
        if *phase == Phase::Loading {
            *phase = Phase::Idle;
            debug!("submission abandoned while loading");
        }
        drop(phase);
        self.enabled.store(true, Ordering::SeqCst);
    }
}

/// Drives one scoring submission at a time.
pub struct Orchestrator<T, L = NoopIndicator> {
    client: ScoreClient<T>,
    indicator: L,
    config: OrchestratorConfig,
    phase: Mutex<Phase>,
    submit_enabled: AtomicBool,
}

impl<T: Transport, L: LoadingIndicator> Orchestrator<T, L> {
    pub fn new(client: ScoreClient<T>, indicator: L, config: OrchestratorConfig) -> Self {
        Self {
            client,
            indicator,
            config,
            phase: Mutex::new(Phase::Idle),
            submit_enabled: AtomicBool::new(true),
        }
    }

    pub fn phase(&self) -> Phase {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> &ScoreClient<T> {
        &self.client
    }

    fn set_phase(&self, phase: Phase) {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner()) = phase;
        debug!(?phase, "phase transition");
    }

    /// Submit `prompt`, sending `lang` when a language preference is active.
    pub async fn submit(&self, prompt: &str, lang: Option<Language>) -> Outcome {
        if self
            .submit_enabled
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Outcome::Busy(catalog::message(Message::Busy));
        }
        let _guard = SubmitGuard {
            enabled: &self.submit_enabled,
            phase: &self.phase,
        };

        self.set_phase(Phase::Idle);
        if prompt.trim().is_empty() {
            return Outcome::Rejected(catalog::message(Message::EnterPrompt));
        }

        self.set_phase(Phase::Loading);
        self.indicator.start(lang.unwrap_or_default());
        let started = Instant::now();

        let result = self.client.score(&ScoreRequest::new(prompt, lang)).await;

        let elapsed = started.elapsed();
        if elapsed < self.config.min_loading {
            tokio::time::sleep(self.config.min_loading - elapsed).await;
        }
        self.indicator.finish();

        match result {
            Ok(scored) => {
                if !self.config.settle.is_zero() {
                    tokio::time::sleep(self.config.settle).await;
                }
                self.set_phase(Phase::Succeeded);
                Outcome::Scored(scored)
            }
            Err(err) => {
                warn!(error = %err, "scoring request failed");
                self.set_phase(Phase::Failed);
                Outcome::Failed(Failure::from_error(err))
            }
        }
    }
}

//! Scoring API client: status mapping, compatibility retry, decoding.
//!
//! This is the only place where HTTP statuses are interpreted; transports
//! just carry bytes.

mod http;
mod retry;

pub use http::{HttpTransport, Transport, USER_AGENT_VALUE};
pub use retry::RetryPolicy;

use tracing::{debug, warn};

use crate::error::{ScoreError, ScoreResult};
use crate::normalize::{normalize, Normalized};
use crate::types::{ClientConfig, HealthStatus, HttpReply, ScoreRequest};

/// A successfully scored prompt.
#[derive(Debug, Clone)]
pub struct Scored {
    pub normalized: Normalized,

    /// Requests sent, including the compatibility retry.
    pub attempts: u32,

    /// The language field was dropped by the compatibility retry.
    pub language_dropped: bool,
}

/// Client for `POST /score` and `GET /health`.
#[derive(Debug, Clone)]
pub struct ScoreClient<T = HttpTransport> {
    transport: T,
    retry: RetryPolicy,
}

impl ScoreClient<HttpTransport> {
    /// Create a client over HTTP.
    pub fn new(config: &ClientConfig) -> ScoreResult<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Create a client from environment variables.
    pub fn from_env() -> ScoreResult<Self> {
        Self::new(&ClientConfig::from_env())
    }
}

impl<T: Transport> ScoreClient<T> {
    /// Create a client over a custom transport with the default retry policy.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Score a prompt.
    ///
    /// Any 2xx is success. 400/422 on a request carrying `lang` is retried
    /// once without it; every other non-2xx is returned as
    /// [`ScoreError::Server`] with the body verbatim.
    pub async fn score(&self, request: &ScoreRequest) -> ScoreResult<Scored> {
        if request.prompt.trim().is_empty() {
            return Err(ScoreError::EmptyPrompt);
        }

        let mut current = request.clone();
        let mut retries = 0u32;

        loop {
            let reply = self.transport.post_score(&current).await?;
            debug!(status = reply.status, attempt = retries + 1, "score response");

            if reply.is_success() {
                let raw = decode_json(&reply)?;
                return Ok(Scored {
                    normalized: normalize(&raw),
                    attempts: retries + 1,
                    language_dropped: request.lang.is_some() && current.lang.is_none(),
                });
            }

            match self.retry.retry_for(&current, reply.status, retries) {
                Some(next) => {
                    retries += 1;
                    warn!(
                        status = reply.status,
                        lang = ?current.lang,
                        retry = retries,
                        "backend rejected language field; retrying without it"
                    );
                    current = next;
                }
                None => {
                    return Err(ScoreError::Server {
                        status: reply.status,
                        body: reply.body,
                    })
                }
            }
        }
    }

    /// Check backend health.
    pub async fn health(&self) -> ScoreResult<HealthStatus> {
        let reply = self.transport.get_health().await?;
        if !reply.is_success() {
            return Err(ScoreError::Server {
                status: reply.status,
                body: reply.body,
            });
        }
        serde_json::from_str(&reply.body).map_err(|e| ScoreError::InvalidResponse {
            message: format!("failed to parse health response: {}", e),
        })
    }
}

fn decode_json(reply: &HttpReply) -> ScoreResult<serde_json::Value> {
    serde_json::from_str(&reply.body).map_err(|e| ScoreError::InvalidResponse {
        message: format!("failed to parse score response: {}", e),
    })
}

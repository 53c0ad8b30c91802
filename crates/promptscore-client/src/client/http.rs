//! HTTP layer. Sends requests and hands back raw status and body; status
//! interpretation lives in `client/mod.rs`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use tracing::debug;

use crate::error::{ScoreError, ScoreResult};
use crate::types::{ClientConfig, HttpReply, ScoreRequest};

/// User agent for scoring requests.
pub const USER_AGENT_VALUE: &str = concat!("promptscore/", env!("CARGO_PKG_VERSION"));

/// Something that can carry requests to the scoring backend.
///
/// Transport failures are `Err`; any HTTP status, success or not, is `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_score(&self, request: &ScoreRequest) -> ScoreResult<HttpReply>;
    async fn get_health(&self) -> ScoreResult<HttpReply>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> ScoreResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(default_headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ScoreError::Config {
            message: format!("failed to create HTTP client: {}", e),
        })?;

        // Normalize base URL (remove trailing slash)
        let base_url = config.url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ScoreError::Config {
                message: "API base URL is empty".to_string(),
            });
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn into_reply(response: reqwest::Response) -> ScoreResult<HttpReply> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ScoreError::Network {
            message: format!("failed to read response body: {}", e),
        })?;
        Ok(HttpReply { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_score(&self, request: &ScoreRequest) -> ScoreResult<HttpReply> {
        let url = format!("{}/score", self.base_url);
        debug!(url = %url, lang = ?request.lang, "posting score request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        Self::into_reply(response).await
    }

    async fn get_health(&self) -> ScoreResult<HttpReply> {
        let url = format!("{}/health", self.base_url);
        debug!(url = %url, "probing backend health");

        let response = self.client.get(&url).send().await?;
        Self::into_reply(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_removed() {
        let config = ClientConfig::default().with_url("http://127.0.0.1:8000/");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_empty_base_url_is_config_error() {
        let config = ClientConfig::default().with_url("/");
        assert!(matches!(
            HttpTransport::new(&config),
            Err(ScoreError::Config { .. })
        ));
    }
}

//! Error types for the scoring client.

/// Scoring client errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Prompt is empty or whitespace only. Never reaches the network.
    #[error("prompt is empty")]
    EmptyPrompt,

    /// Backend answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// Transport failure (connect, TLS, timeout, body read).
    #[error("network error: {message}")]
    Network { message: String },

    /// 2xx response whose body is not JSON.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Preference store error.
    #[error("store error: {message}")]
    Store { message: String },
}

impl ScoreError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyPrompt => 1,
            Self::Config { .. } | Self::Store { .. } => 2,
            Self::Server { .. } => 3,
            Self::Network { .. } | Self::InvalidResponse { .. } => 4,
        }
    }

    /// Whether the error belongs to the transport category (network failure or
    /// a malformed response body).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::InvalidResponse { .. })
    }
}

impl From<reqwest::Error> for ScoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;

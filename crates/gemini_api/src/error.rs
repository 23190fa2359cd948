use reqwest::StatusCode;
use thiserror::Error;

/// Terminal failure modes of [`GeminiClient::ask`](crate::GeminiClient::ask).
///
/// Decode-level structural problems never appear here; they collapse into
/// an empty extraction, which the retry loop treats like an empty answer.
#[derive(Debug, Error)]
pub enum AskError {
    /// Every allowed attempt ended in a connection or timeout failure.
    #[error("transport failed after {attempts} attempts: {source}")]
    TransportExhausted {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status. Never retried.
    #[error("unexpected HTTP status {0}")]
    BadStatus(StatusCode),

    /// Every successful exchange decoded to empty text.
    #[error("empty response after {attempts} attempts")]
    EmptyResponse { attempts: u32 },

    /// A configured value could not be carried as an HTTP header.
    #[error("invalid header value for {0}")]
    InvalidHeader(String),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

impl AskError {
    /// HTTP status carried by a [`AskError::BadStatus`] failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::BadStatus(code) => Some(*code),
            _ => None,
        }
    }
}

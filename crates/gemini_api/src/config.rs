use std::time::Duration;

use crate::retry::DEFAULT_RETRIES;
use crate::url::{DEFAULT_BASE_URL, DEFAULT_ENDPOINT_PATH};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Transport configuration for Gemini chat requests.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL for the Gemini web frontend.
    pub base_url: String,
    /// Path of the batch chat endpoint under `base_url`.
    pub endpoint_path: String,
    /// Optional `User-Agent` override.
    pub user_agent: Option<String>,
    /// Per-request timeout covering connect, send, and body read.
    pub timeout: Duration,
    /// Total attempts one `ask` call may make before giving up.
    pub retries: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            retries: DEFAULT_RETRIES,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_endpoint_path(mut self, endpoint_path: impl Into<String>) -> Self {
        self.endpoint_path = endpoint_path.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }
}

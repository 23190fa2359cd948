use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::GeminiConfig;
use crate::decode::extract_text;
use crate::error::AskError;
use crate::headers::build_headers;
use crate::payload::{encode_payload, FORM_FIELD};
use crate::progress::{LogObserver, RetryNotice, RetryObserver, RetryReason};
use crate::retry::{backoff_delay, EMPTY_RESPONSE_DELAY};
use crate::session::Session;
use crate::url::normalize_chat_url;

/// Blocking client for the Gemini web chat endpoint.
///
/// One `ask` call fully completes before returning; there are no overlapping
/// in-flight requests and no internal synchronization. Callers needing
/// concurrency must use independent instances or serialize access.
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
    session: Session,
    observer: Box<dyn RetryObserver>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AskError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            config,
            session: Session::default(),
            observer: Box::new(LogObserver),
        })
    }

    /// Replace the retry progress observer.
    pub fn with_observer(mut self, observer: Box<dyn RetryObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Continue a prior upstream conversation by installing its identifier
    /// pair.
    pub fn resume(&mut self, session: Session) {
        self.session = session;
    }

    /// Reset conversation state so the next `ask` starts a fresh upstream
    /// conversation. Idempotent.
    pub fn clear_conversation(&mut self) {
        self.session.reset();
    }

    pub fn endpoint_url(&self) -> String {
        normalize_chat_url(&self.config.base_url, &self.config.endpoint_path)
    }

    /// Build one POST request carrying `payload` in the `f.req` form field.
    ///
    /// The header map is applied after the form body so the charset-suffixed
    /// content type wins over the one the form encoder installs.
    pub fn build_request(
        &self,
        payload: &str,
    ) -> Result<reqwest::blocking::RequestBuilder, AskError> {
        let headers = self.header_map()?;
        Ok(self
            .http
            .post(self.endpoint_url())
            .form(&[(FORM_FIELD, payload)])
            .headers(headers))
    }

    fn header_map(&self) -> Result<HeaderMap, AskError> {
        let mut out = HeaderMap::new();
        for (key, value) in build_headers(&self.config) {
            out.insert(
                HeaderName::from_bytes(key.as_bytes())
                    .map_err(|_| AskError::InvalidHeader(key.clone()))?,
                HeaderValue::from_str(&value).map_err(|_| AskError::InvalidHeader(key.clone()))?,
            );
        }
        Ok(out)
    }

    /// Send one chat turn and return the extracted answer text.
    ///
    /// Attempt loop, bounded by the configured retry count:
    /// - transport failure: linear backoff, then retry; terminal as
    ///   [`AskError::TransportExhausted`] on the last attempt
    /// - non-success status: terminal immediately as
    ///   [`AskError::BadStatus`], never retried
    /// - success that decodes to empty text: flat delay, then retry;
    ///   terminal as [`AskError::EmptyResponse`] on the last attempt
    /// - success with text: returned immediately
    pub fn ask(&mut self, message: &str) -> Result<String, AskError> {
        let payload = encode_payload(message, &self.session);
        let attempts = self.config.retries.max(1);

        for attempt in 0..attempts {
            let exchange = self.build_request(&payload)?.send().and_then(|response| {
                let status = response.status();
                response.text().map(|body| (status, body))
            });

            match exchange {
                Ok((status, body)) => {
                    if !status.is_success() {
                        log::debug!("upstream returned {status}");
                        return Err(AskError::BadStatus(status));
                    }

                    let text = extract_text(&body);
                    if !text.is_empty() {
                        return Ok(text);
                    }

                    log::debug!("attempt {}: response decoded to empty text", attempt + 1);
                    if attempt + 1 < attempts {
                        self.pause(attempt, attempts, EMPTY_RESPONSE_DELAY, RetryReason::EmptyDecode);
                    }
                }
                Err(error) => {
                    log::debug!("attempt {}: transport error: {error}", attempt + 1);
                    if attempt + 1 == attempts {
                        return Err(AskError::TransportExhausted {
                            attempts,
                            source: error,
                        });
                    }
                    self.pause(attempt, attempts, backoff_delay(attempt), RetryReason::Transport);
                }
            }
        }

        Err(AskError::EmptyResponse { attempts })
    }

    fn pause(&mut self, attempt: u32, total: u32, delay: Duration, reason: RetryReason) {
        self.observer.on_retry(&RetryNotice {
            attempt: attempt + 1,
            total,
            delay,
            reason,
        });
        thread::sleep(delay);
    }
}

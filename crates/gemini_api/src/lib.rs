//! Transport-only Gemini web chat client primitives.
//!
//! This crate owns request/response building and parsing behavior for the
//! reverse-engineered Gemini web endpoint only. It intentionally contains no
//! auth/login code and no terminal UI coupling.
//!
//! The upstream wire contract is undocumented: a chat turn travels as a
//! doubly JSON-encoded positional array inside a single `f.req` form field,
//! and the reply comes back as a security-prefixed, newline-delimited batch
//! of loosely typed rows. Decoding is best-effort by contract; structural
//! surprises collapse into "no text extracted" rather than errors, and the
//! retry loop in [`GeminiClient::ask`] treats that outcome as retryable.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod headers;
pub mod payload;
pub mod progress;
pub mod retry;
pub mod session;
pub mod url;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use decode::extract_text;
pub use error::AskError;
pub use payload::{encode_payload, FORM_FIELD};
pub use progress::{LogObserver, RetryNotice, RetryObserver, RetryReason};
pub use session::Session;
pub use url::normalize_chat_url;

//! Retry progress observation, decoupling the client from presentation.

use std::time::Duration;

/// Why a retry is about to happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryReason {
    /// The HTTP exchange itself failed (connect error or timeout).
    Transport,
    /// The exchange succeeded but no text could be extracted.
    EmptyDecode,
}

/// One backoff notice emitted just before the client sleeps and retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryNotice {
    /// 1-based index of the attempt that just failed.
    pub attempt: u32,
    /// Total attempts the client will make.
    pub total: u32,
    /// How long the client sleeps before the next attempt.
    pub delay: Duration,
    pub reason: RetryReason,
}

/// Observer for retry progress.
///
/// Notices are observability, not part of the functional contract; the
/// client behaves identically whatever the observer does with them.
pub trait RetryObserver {
    fn on_retry(&mut self, notice: &RetryNotice);
}

/// Default observer: forwards notices to the `log` facade and prints
/// nothing.
#[derive(Debug, Default)]
pub struct LogObserver;

impl RetryObserver for LogObserver {
    fn on_retry(&mut self, notice: &RetryNotice) {
        log::debug!(
            "retrying in {:?} after attempt {}/{} ({:?})",
            notice.delay,
            notice.attempt,
            notice.total,
            notice.reason
        );
    }
}

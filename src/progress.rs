use gemini_api::{RetryNotice, RetryObserver, RetryReason};

/// Retry observer that prints transport backoffs to stderr.
///
/// Empty-decode retries stay quiet here; they already reach the `log`
/// facade at debug level inside the client.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl RetryObserver for ConsoleProgress {
    fn on_retry(&mut self, notice: &RetryNotice) {
        if notice.reason == RetryReason::Transport {
            eprintln!(
                "Timeout, retrying in {}s... (attempt {}/{})",
                notice.delay.as_secs(),
                notice.attempt,
                notice.total
            );
        }
    }
}

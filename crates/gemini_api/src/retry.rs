use std::time::Duration;

/// Total attempts one `ask` call makes before giving up.
pub const DEFAULT_RETRIES: u32 = 3;

/// Flat delay before retrying a well-formed response that decoded to
/// empty text.
pub const EMPTY_RESPONSE_DELAY: Duration = Duration::from_secs(1);

/// Linear backoff delay after a failed transport attempt.
///
/// Attempts are zero-based: the first retry waits 2s, the second 4s.
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs((u64::from(attempt) + 1) * 2)
}

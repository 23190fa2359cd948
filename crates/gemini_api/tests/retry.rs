use std::time::Duration;

use gemini_api::retry::{backoff_delay, DEFAULT_RETRIES, EMPTY_RESPONSE_DELAY};

#[test]
fn backoff_is_linear_and_one_based() {
    assert_eq!(backoff_delay(0), Duration::from_secs(2));
    assert_eq!(backoff_delay(1), Duration::from_secs(4));
    assert_eq!(backoff_delay(2), Duration::from_secs(6));
}

#[test]
fn empty_response_delay_is_flat() {
    assert_eq!(EMPTY_RESPONSE_DELAY, Duration::from_secs(1));
}

#[test]
fn default_retry_budget() {
    assert_eq!(DEFAULT_RETRIES, 3);
}

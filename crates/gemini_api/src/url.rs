/// Default base URL for Gemini web transport requests.
pub const DEFAULT_BASE_URL: &str = "https://gemini.google.com";

/// Default path of the batch chat endpoint.
pub const DEFAULT_ENDPOINT_PATH: &str =
    "/_/BardChatUi/data/assistant.lamda.BardFrontendService/StreamGenerate";

/// Join a base URL and an endpoint path into a chat request URL.
///
/// Normalization rules:
/// 1) an empty base falls back to [`DEFAULT_BASE_URL`]
/// 2) trailing slashes on the base are dropped
/// 3) an empty path falls back to [`DEFAULT_ENDPOINT_PATH`]
/// 4) a missing leading slash on the path is supplied
pub fn normalize_chat_url(base: &str, path: &str) -> String {
    let base = normalize_origin(base);
    let path = if path.trim().is_empty() {
        DEFAULT_ENDPOINT_PATH
    } else {
        path.trim()
    };

    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Normalize a base URL into the origin form used for `Origin`/`Referer`
/// headers: defaulted when empty, trimmed, no trailing slash.
pub fn normalize_origin(base: &str) -> String {
    let base = if base.trim().is_empty() {
        DEFAULT_BASE_URL
    } else {
        base.trim()
    };
    base.trim_end_matches('/').to_string()
}

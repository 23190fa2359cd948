use std::collections::BTreeMap;

use crate::config::GeminiConfig;
use crate::url::normalize_origin;

pub const HEADER_USER_AGENT: &str = "User-Agent";
pub const HEADER_ORIGIN: &str = "Origin";
pub const HEADER_REFERER: &str = "Referer";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// Fixed browser identity presented to the upstream frontend.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

/// Form content type, charset suffix included, byte-for-byte as the web
/// client sends it.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Build a deterministic header map for one chat request.
///
/// `Origin` is the normalized base URL and `Referer` is that origin with a
/// trailing slash, matching what the browser frontend emits.
pub fn build_headers(config: &GeminiConfig) -> BTreeMap<String, String> {
    let origin = normalize_origin(&config.base_url);
    let user_agent = config
        .user_agent
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_USER_AGENT);

    let mut headers = BTreeMap::new();
    headers.insert(HEADER_USER_AGENT.to_owned(), user_agent.to_owned());
    headers.insert(HEADER_ORIGIN.to_owned(), origin.clone());
    headers.insert(HEADER_REFERER.to_owned(), format!("{origin}/"));
    headers.insert(HEADER_CONTENT_TYPE.to_owned(), FORM_CONTENT_TYPE.to_owned());
    headers
}

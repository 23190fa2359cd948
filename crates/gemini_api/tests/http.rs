use gemini_api::headers::FORM_CONTENT_TYPE;
use gemini_api::{encode_payload, GeminiClient, GeminiConfig, Session};

#[test]
fn http_request_targets_chat_endpoint() {
    let client = GeminiClient::new(GeminiConfig::default()).expect("client");
    let payload = encode_payload("hi", &Session::default());

    let request = client
        .build_request(&payload)
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(request.method(), "POST");
    assert_eq!(request.url().as_str(), client.endpoint_url());
}

#[test]
fn http_request_content_type_keeps_charset_suffix() {
    let client = GeminiClient::new(GeminiConfig::default()).expect("client");
    let payload = encode_payload("hi", &Session::default());

    let request = client
        .build_request(&payload)
        .expect("build request")
        .build()
        .expect("request");

    let content_type = request
        .headers()
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .expect("ascii header value");
    assert_eq!(content_type, FORM_CONTENT_TYPE);
}

#[test]
fn http_request_body_is_form_encoded_envelope() {
    let client = GeminiClient::new(GeminiConfig::default()).expect("client");
    let payload = encode_payload("hi", &Session::default());

    let request = client
        .build_request(&payload)
        .expect("build request")
        .build()
        .expect("request");

    let body = request
        .body()
        .and_then(|body| body.as_bytes())
        .expect("buffered form body");
    let body = std::str::from_utf8(body).expect("utf-8 body");

    // "[null," percent-encodes to %5Bnull%2C under form encoding.
    assert!(body.starts_with("f.req=%5Bnull%2C"), "body was: {body}");
}

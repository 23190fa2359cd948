use gemini_api::{encode_payload, Session, FORM_FIELD};
use serde_json::Value;

fn decode_inner(wire: &str) -> Value {
    let outer: Value = serde_json::from_str(wire).expect("outer envelope parses");
    let outer = outer.as_array().expect("outer envelope is an array");
    assert_eq!(outer.len(), 2);
    assert!(outer[0].is_null());

    let inner_json = outer[1].as_str().expect("inner envelope is a string");
    serde_json::from_str(inner_json).expect("inner envelope parses")
}

#[test]
fn payload_parses_at_both_nesting_levels() {
    let session = Session::default();
    let inner = decode_inner(&encode_payload("hello there", &session));
    let inner = inner.as_array().expect("inner is an array");

    assert_eq!(inner.len(), 3);
    assert_eq!(inner[0][0], "hello there");
    assert_eq!(inner[1], serde_json::json!(["en-US"]));
    assert_eq!(inner[2], serde_json::json!(["", ""]));
}

#[test]
fn payload_message_slot_carries_placeholders() {
    let inner = decode_inner(&encode_payload("hi", &Session::default()));
    let message_slot = inner[0].as_array().expect("message slot is an array");

    assert_eq!(message_slot.len(), 7);
    assert_eq!(message_slot[0], "hi");
    assert_eq!(message_slot[1], 0);
    assert!(message_slot[2].is_null());
    assert!(message_slot[5].is_null());
    assert_eq!(message_slot[6], 0);
}

#[test]
fn payload_carries_session_pair_verbatim() {
    let session = Session::new("c_abc123", "r_def456");
    let inner = decode_inner(&encode_payload("continue", &session));

    assert_eq!(inner[2], serde_json::json!(["c_abc123", "r_def456"]));
}

#[test]
fn payload_session_pair_is_empty_after_reset() {
    let mut session = Session::new("c_abc123", "r_def456");
    session.reset();
    session.reset();

    let inner = decode_inner(&encode_payload("fresh", &session));
    assert_eq!(inner[2], serde_json::json!(["", ""]));
}

#[test]
fn payload_accepts_empty_message() {
    let inner = decode_inner(&encode_payload("", &Session::default()));
    assert_eq!(inner[0][0], "");
}

#[test]
fn payload_escapes_control_characters_and_quotes() {
    let message = "line one\nline \"two\"\ttabbed\u{1}";
    let inner = decode_inner(&encode_payload(message, &Session::default()));
    assert_eq!(inner[0][0], message);
}

#[test]
fn payload_is_deterministic() {
    let session = Session::new("c", "r");
    assert_eq!(
        encode_payload("same input", &session),
        encode_payload("same input", &session)
    );
}

#[test]
fn form_field_name_is_stable() {
    assert_eq!(FORM_FIELD, "f.req");
}

use serde_json::json;

use crate::session::Session;

/// Form field carrying the serialized request envelope.
pub const FORM_FIELD: &str = "f.req";

/// Language hint slot in the inner request array.
const REQUEST_LANGUAGE: &str = "en-US";

/// Encode a chat message and session pair into the `f.req` wire string.
///
/// The envelope is positional: an outer `[null, innerJSON]` pair whose
/// second element is itself a serialized three-element array of
/// `[[message, 0, null, null, null, null, 0], ["en-US"],
/// [conversation_id, response_id]]`. The zero and null slots are opaque
/// upstream bookkeeping; their positions are part of the wire contract and
/// must not be reordered or dropped.
///
/// Any message is valid input, including the empty string and strings with
/// control characters (carried through JSON string escaping). Output is
/// deterministic for identical inputs.
pub fn encode_payload(message: &str, session: &Session) -> String {
    let inner = json!([
        [message, 0, null, null, null, null, 0],
        [REQUEST_LANGUAGE],
        [session.conversation_id.as_str(), session.response_id.as_str()],
    ]);
    let outer = json!([null, inner.to_string()]);
    outer.to_string()
}

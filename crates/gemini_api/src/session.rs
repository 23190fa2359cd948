/// Opaque identifier pair used to continue a prior upstream conversation.
///
/// Both identifiers start empty; an empty pair asks upstream to open a fresh
/// conversation. The decoder never feeds identifiers back after a successful
/// answer, so multi-turn context only advances when a caller sets the pair
/// explicitly via [`GeminiClient::resume`](crate::GeminiClient::resume).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub conversation_id: String,
    pub response_id: String,
}

impl Session {
    pub fn new(conversation_id: impl Into<String>, response_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            response_id: response_id.into(),
        }
    }

    /// Clear both identifiers. Idempotent.
    pub fn reset(&mut self) {
        self.conversation_id.clear();
        self.response_id.clear();
    }

    /// True when no upstream conversation is being continued.
    pub fn is_empty(&self) -> bool {
        self.conversation_id.is_empty() && self.response_id.is_empty()
    }
}

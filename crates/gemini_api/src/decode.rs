use serde_json::Value;

/// Anti-hijacking prefix upstream prepends to every response body.
pub const SECURITY_PREFIX: &str = ")]}'";

/// Row tag marking a chat payload row in the batch response.
const ANSWER_ROW_TAG: &str = "wrb.fr";

/// Markdown fence marker used by the code-block heuristic.
const FENCE: &str = "```";

/// Extract the answer text from one raw response body.
///
/// The body is the full envelope: an optional [`SECURITY_PREFIX`] followed
/// by newline-delimited JSON. Only the first line carries the payload;
/// trailing lines hold streaming continuation data this client ignores.
///
/// Returns an empty string when no text can be extracted. Malformed JSON,
/// missing rows, and wrong shapes are normal outcomes here, never errors;
/// the upstream format is undocumented and decoding is best-effort.
pub fn extract_text(raw: &str) -> String {
    let body = raw.strip_prefix(SECURITY_PREFIX).unwrap_or(raw);
    let Some(first_line) = body.trim().lines().next() else {
        return String::new();
    };

    let Ok(Value::Array(rows)) = serde_json::from_str::<Value>(first_line) else {
        return String::new();
    };

    for row in &rows {
        if let Some(text) = answer_from_row(row) {
            return text;
        }
    }

    String::new()
}

/// Decode one top-level row, returning the first non-empty answer it holds.
///
/// A usable row is `["wrb.fr", _, innerJSON, ...]` where `innerJSON` is a
/// string re-encoding a nested array whose index 4 holds content parts.
/// Rows failing any shape check are skipped, not fatal.
fn answer_from_row(row: &Value) -> Option<String> {
    let row = row.as_array()?;
    if row.len() < 3 || row[0].as_str() != Some(ANSWER_ROW_TAG) {
        return None;
    }

    let inner: Value = serde_json::from_str(row[2].as_str()?).ok()?;
    let content = inner.get(4)?.as_array()?;

    for part in content {
        if let Some(candidate) = part_candidate(part) {
            if !candidate.is_empty() {
                return Some(render_candidate(candidate));
            }
        }
    }

    None
}

/// Pull the answer candidate out of one content part.
///
/// A part is `[_, payload, ...]` where the payload is either a plain string
/// or a one-element array wrapping a string; both encodings are equivalent.
fn part_candidate(part: &Value) -> Option<&str> {
    let part = part.as_array()?;
    if part.len() < 2 {
        return None;
    }

    match &part[1] {
        Value::String(text) => Some(text),
        Value::Array(wrapped) => wrapped.first().and_then(Value::as_str),
        _ => None,
    }
}

/// Apply the code-fence heuristic to a non-empty candidate.
///
/// Upstream sometimes wraps the literal answer in a markdown code block.
/// When the candidate holds at least one complete fenced block, the answer
/// is taken to be the trimmed text after the final fence, or the fenced
/// body itself when the candidate ends at a closing fence. Known
/// approximation: answers mixing prose with trailing code lose the prose.
/// A lone fence marker with no closing fence falls through to the raw text.
fn render_candidate(candidate: &str) -> String {
    if candidate.contains(FENCE) {
        let segments: Vec<&str> = candidate.split(FENCE).collect();
        if segments.len() >= 3 {
            if let Some(text) = segments
                .iter()
                .rev()
                .map(|segment| segment.trim())
                .find(|segment| !segment.is_empty())
            {
                return text.to_string();
            }
        }
    }

    candidate.to_string()
}

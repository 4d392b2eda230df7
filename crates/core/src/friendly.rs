//! Normalization of raw failure text into user-presentable messages.
//!
//! Provider failures arrive as arbitrary strings: sometimes a plain
//! message, sometimes a whole JSON error payload embedded mid-sentence.
//! [`friendly_message`] maps any of them to something short enough to
//! show next to a retry control. It never fails; every internal parse
//! error falls through to the next rule.

use std::sync::LazyLock;

use regex::Regex;

/// Fixed message for quota / rate-limit failures.
pub const QUOTA_MESSAGE: &str = "Quota exceeded. Please check your API billing details.";

/// Maximum surfaced message length before truncation.
pub const MAX_MESSAGE_LENGTH: usize = 150;

/// Matches an embedded `{"error": ...}` JSON object inside a longer
/// string. Greedy, like the payloads it targets: the fragment runs to
/// the last closing brace.
static EMBEDDED_ERROR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{"error":.*\}"#).expect("valid regex"));

/// Convert raw failure text into a bounded, user-presentable message.
///
/// 1. Quota markers (`429`, `quota`, `RESOURCE_EXHAUSTED`) produce the
///    fixed [`QUOTA_MESSAGE`].
/// 2. An embedded `{"error": ...}` payload is parsed and its nested
///    `message` extracted; unparseable fragments fall through.
/// 3. Anything else is truncated to [`MAX_MESSAGE_LENGTH`] characters
///    with an ellipsis suffix.
pub fn friendly_message(raw: &str) -> String {
    if raw.contains("429") || raw.contains("quota") || raw.contains("RESOURCE_EXHAUSTED") {
        return QUOTA_MESSAGE.to_string();
    }

    if let Some(fragment) = EMBEDDED_ERROR_RE.find(raw) {
        if let Some(message) = extract_error_message(fragment.as_str()) {
            return message;
        }
    }

    truncate(raw)
}

/// Pull `error.message` out of a `{"error": {...}}` fragment, if the
/// fragment parses as JSON and carries one.
fn extract_error_message(fragment: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(fragment).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Truncate on a character boundary, appending an ellipsis when cut.
fn truncate(raw: &str) -> String {
    if raw.chars().count() > MAX_MESSAGE_LENGTH {
        let head: String = raw.chars().take(MAX_MESSAGE_LENGTH).collect();
        format!("{head}...")
    } else {
        raw.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// src/extract/mod.rs
// Reply extraction pipeline: normalize -> re-parse -> paragraph

mod normalize;
mod paragraph;

pub use normalize::{MAX_WALK_DEPTH, PREFERRED_KEYS, extract_assistant_text, reparse_json_string};
pub use paragraph::format_as_paragraph;

use serde_json::Value;

/// Whitespace as the chat UI trims it: Unicode white space plus the byte
/// order mark, but not NEL (U+0085).
pub(crate) fn is_blank_char(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

pub(crate) fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank_char)
}

/// Extract the reply text from a webhook payload, unwrapping one layer of
/// string-encoded JSON. No paragraph formatting is applied.
pub fn extract_reply(data: &Value) -> Option<String> {
    let text = extract_assistant_text(data)?;
    Some(reparse_json_string(&text).unwrap_or(text))
}

/// Full pipeline: the text the chat UI displays for `data`.
///
/// An empty string means the payload held nothing extractable.
pub fn render_reply(data: &Value) -> String {
    extract_reply(data)
        .map(|text| format_as_paragraph(&text))
        .unwrap_or_default()
}

// src/extract/normalize.rs
// Best-guess text extraction from arbitrarily shaped webhook payloads

use serde_json::{Map, Number, Value};

use super::trim_blank;

/// Object fields most likely to hold the reply, highest priority first
pub const PREFERRED_KEYS: [&str; 9] = [
    "text", "message", "reply", "result", "body", "data", "response", "output", "answer",
];

/// Fields checked on the first element of an array payload
const WRAPPER_KEYS: [&str; 3] = ["json", "data", "body"];

/// Deepest level the fallback walk descends to (root object is level 0)
pub const MAX_WALK_DEPTH: usize = 6;

/// A stringified leaf found during the fallback walk
struct Candidate {
    text: String,
    len: usize,
}

impl Candidate {
    fn new(text: String) -> Self {
        let len = text.chars().count();
        Self { text, len }
    }
}

/// Guess the human-readable text held by `data`.
///
/// Strings pass through unchanged and scalars are stringified. Objects are
/// searched through [`PREFERRED_KEYS`] first; when none of them yields text,
/// the longest string/number/boolean within [`MAX_WALK_DEPTH`] levels wins.
/// Arrays are unwrapped through the `json`/`data`/`body` field of their
/// first element before falling back to the same walk.
///
/// Returns `None` when nothing extractable is found.
pub fn extract_assistant_text(data: &Value) -> Option<String> {
    match data {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_to_string(n)),
        Value::Array(items) => {
            if let Some(inner) = items.first().and_then(wrapped_value)
                && let Some(text) = non_empty(extract_assistant_text(inner))
            {
                return Some(text);
            }
            longest_candidate(data)
        }
        Value::Object(map) => from_preferred_keys(map).or_else(|| longest_candidate(data)),
    }
}

/// Unwrap one extra layer of JSON encoded inside a string.
///
/// Returns the replacement text when `text` looks like a JSON object or array,
/// parses, and yields something; `None` means keep `text` as it is.
pub fn reparse_json_string(text: &str) -> Option<String> {
    let trimmed = trim_blank(text);
    let looks_like_json = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if !looks_like_json {
        return None;
    }

    let parsed: Value = serde_json::from_str(trimmed).ok()?;
    if let Some(text) = non_empty(extract_assistant_text(&parsed)) {
        return Some(text);
    }

    match &parsed {
        Value::Object(map) if map.len() == 1 => map.values().next().and_then(scalar_to_string),
        _ => None,
    }
}

/// First non-null wrapper field of an array's leading object
fn wrapped_value(first: &Value) -> Option<&Value> {
    let map = first.as_object()?;
    WRAPPER_KEYS
        .iter()
        .find_map(|key| map.get(*key).filter(|v| !v.is_null()))
}

fn from_preferred_keys(map: &Map<String, Value>) -> Option<String> {
    for key in PREFERRED_KEYS {
        match map.get(key) {
            Some(Value::String(s)) if !trim_blank(s).is_empty() => return Some(s.clone()),
            Some(nested @ (Value::Object(_) | Value::Array(_))) => {
                if let Some(text) = non_empty(extract_assistant_text(nested)) {
                    return Some(text);
                }
            }
            _ => {}
        }
    }
    None
}

fn longest_candidate(root: &Value) -> Option<String> {
    let mut candidates = Vec::new();
    collect_candidates(root, 0, &mut candidates);

    // Strictly-longer comparison keeps the first of equally long candidates
    let mut best: Option<Candidate> = None;
    for candidate in candidates {
        if best.as_ref().is_none_or(|b| candidate.len > b.len) {
            best = Some(candidate);
        }
    }
    best.map(|c| c.text)
}

fn collect_candidates(value: &Value, depth: usize, out: &mut Vec<Candidate>) {
    if depth > MAX_WALK_DEPTH {
        return;
    }
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                collect_candidates(item, depth + 1, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_candidates(item, depth + 1, out);
            }
        }
        scalar => {
            if let Some(text) = scalar_to_string(scalar) {
                out.push(Candidate::new(text));
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_to_string(n)),
        _ => None,
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}

/// Format a JSON number the way the chat UI prints it: shortest round-trip
/// digits, plain notation for magnitudes in `[1e-6, 1e21)`, exponent
/// notation (`1e+21`, `1.5e-7`) outside it. `-0` prints as `"0"`.
fn number_to_string(n: &Number) -> String {
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest digits as `d[.ddd]e<exp>`
    let scientific = format!("{:e}", f.abs());
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return f.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return f.to_string();
    };
    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    // Decimal point position relative to the first digit
    let point = exp + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exp.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exp.abs())
        }
    };

    if f < 0.0 { format!("-{}", body) } else { body }
}

// tests/extract_pipeline.rs
// Behavioral checks for the reply extraction pipeline

use counsel::extract::{
    MAX_WALK_DEPTH, extract_assistant_text, extract_reply, format_as_paragraph, render_reply,
};
use serde_json::{Map, Value, json};

/// Wrap `leaf` in `levels` single-key objects
fn nested(levels: usize, leaf: Value) -> Value {
    (0..levels).fold(leaf, |inner, i| {
        let mut map = Map::new();
        map.insert(format!("k{}", i), inner);
        Value::Object(map)
    })
}

#[test]
fn strings_pass_through_unchanged() {
    for s in ["", "hello", "  with spaces ", "{\"text\":\"x\"}", "**md**\n1. item"] {
        assert_eq!(extract_assistant_text(&json!(s)).as_deref(), Some(s));
    }
}

#[test]
fn first_preferred_key_wins() {
    assert_eq!(
        extract_assistant_text(&json!({"text": "hello"})).as_deref(),
        Some("hello")
    );
    let data = json!({"output": "second choice", "message": "first choice", "text": ""});
    assert_eq!(extract_assistant_text(&data).as_deref(), Some("first choice"));
}

#[test]
fn longest_string_without_preferred_keys() {
    let data = json!({"foo": "short", "bar": "a much longer string here"});
    assert_eq!(
        extract_assistant_text(&data).as_deref(),
        Some("a much longer string here")
    );
}

#[test]
fn longest_candidate_may_be_metadata() {
    // The heuristic prefers length over meaning
    let data = json!({"content": "Yes.", "trace": "execution-7f3a9c21-node-httpRequest"});
    assert_eq!(
        extract_assistant_text(&data).as_deref(),
        Some("execution-7f3a9c21-node-httpRequest")
    );
}

#[test]
fn array_json_wrapper_is_unwrapped() {
    let data = json!([{"json": {"message": "nested"}}]);
    assert_eq!(extract_assistant_text(&data).as_deref(), Some("nested"));
}

#[test]
fn array_data_wrapper_holding_string() {
    let data = json!([{"data": "x"}, {"other": "much longer than x"}]);
    assert_eq!(extract_assistant_text(&data).as_deref(), Some("x"));
}

#[test]
fn string_encoded_json_is_unwrapped_once() {
    let data = json!("{\"text\":\"wrapped\"}");
    assert_eq!(extract_reply(&data).as_deref(), Some("wrapped"));
    assert_eq!(render_reply(&data), "wrapped");
}

#[test]
fn string_encoded_json_only_one_layer() {
    let inner = json!({"text": "innermost"}).to_string();
    let outer = json!({ "text": inner }).to_string();
    // The second layer stays encoded
    assert_eq!(extract_reply(&json!(outer)), Some(inner));
}

#[test]
fn paragraph_strips_bold_and_joins() {
    assert_eq!(
        format_as_paragraph("**Bold** line one\nLine two"),
        "Bold line one Line two"
    );
}

#[test]
fn paragraph_keeps_numbered_items_on_own_lines() {
    let out = format_as_paragraph("Intro\n1. First\n2. Second");
    assert!(out.starts_with("Intro\n"), "intro must not get an extra break: {:?}", out);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["Intro", "1. First", "2. Second"]);
}

#[test]
fn walk_excludes_leaves_below_depth_limit() {
    let deep = nested(MAX_WALK_DEPTH + 1, json!("unreachable but very very long"));
    let data = json!({"wrapper": deep, "visible": "ok"});
    assert_eq!(extract_assistant_text(&data).as_deref(), Some("ok"));

    let only_deep = nested(MAX_WALK_DEPTH + 4, json!("hidden"));
    assert_eq!(extract_assistant_text(&only_deep), None);
}

#[test]
fn walk_survives_very_deep_nesting() {
    let deep = nested(1_000, json!("bottom"));
    assert_eq!(extract_assistant_text(&deep), None);
    assert_eq!(render_reply(&deep), "");
}

#[test]
fn webhook_style_reply_end_to_end() {
    let data = json!([{
        "json": {
            "output": "**Summary**\nYour lease may be terminated if:\n1. Rent is unpaid\n2. The unit is damaged\n- Consult a lawyer",
            "sessionId": "a1b2c3"
        }
    }]);
    assert_eq!(
        render_reply(&data),
        "Summary Your lease may be terminated if:\n1. Rent is unpaid\n2. The unit is damaged\n- Consult a lawyer"
    );
}

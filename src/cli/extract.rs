// src/cli/extract.rs
// Offline reply extraction for saved webhook payloads

use anyhow::{Context, Result};
use counsel::extract::{extract_reply, render_reply};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Print the reply text of a payload read from `path` or stdin
pub fn run_extract(path: Option<PathBuf>, raw: bool) -> Result<()> {
    let input = read_input(path.as_deref())?;
    println!("{}", render_input(&input, raw));
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload from {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}

/// Bodies that are not valid JSON are treated as plain text, as the relay
/// does for non-JSON webhook responses.
fn render_input(input: &str, raw: bool) -> String {
    let payload = serde_json::from_str::<Value>(input)
        .unwrap_or_else(|_| Value::String(input.to_string()));

    if raw {
        extract_reply(&payload).unwrap_or_default()
    } else {
        render_reply(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_render_json_payload() {
        let input = r#"[{"json": {"output": "**Note:** the deadline\nis Friday"}}]"#;
        assert_eq!(render_input(input, false), "Note: the deadline is Friday");
        assert_eq!(render_input(input, true), "**Note:** the deadline\nis Friday");
    }

    #[test]
    fn test_render_plain_text_payload() {
        assert_eq!(render_input("just text\nhere", false), "just text here");
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"reply": "from file"}}"#).unwrap();

        let input = read_input(Some(file.path())).unwrap();
        assert_eq!(render_input(&input, false), "from file");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/payload.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read payload"));
    }
}

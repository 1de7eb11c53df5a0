// src/extract/paragraph.rs
// Flow multi-line markdown-ish replies into one paragraph

use regex::Regex;
use std::sync::LazyLock;

use super::trim_blank;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static NUMBERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("valid regex"));
static SPACE_BEFORE_NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[[\s\x{FEFF}]&&[^\x{85}]]+\n").expect("valid regex"));
static SPACE_AFTER_NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[[\s\x{FEFF}]&&[^\x{85}]]+").expect("valid regex"));

/// Render `text` as a single paragraph with markdown emphasis removed.
///
/// Lines are trimmed, blank lines dropped and the rest joined with a space.
/// Numbered (`1.`) and hyphen (`-`) list items keep a line break in front so
/// each item still starts on its own line.
pub fn format_as_paragraph(text: &str) -> String {
    let lines: Vec<String> = text
        .lines()
        .map(trim_blank)
        .filter(|line| !line.is_empty())
        .map(format_line)
        .collect();

    let joined = lines.join(" ");
    let joined = SPACE_BEFORE_NEWLINE_RE.replace_all(&joined, "\n");
    let joined = SPACE_AFTER_NEWLINE_RE.replace_all(&joined, "\n");
    trim_blank(&joined).to_string()
}

fn format_line(line: &str) -> String {
    let unbolded = BOLD_RE.replace_all(line, "$1");
    let stripped = unbolded.replace('*', "");

    if NUMBERED_ITEM_RE.is_match(&stripped) || stripped.starts_with('-') {
        format!("\n{}", stripped)
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_markers_stripped_and_lines_joined() {
        assert_eq!(
            format_as_paragraph("**Bold** line one\nLine two"),
            "Bold line one Line two"
        );
    }

    #[test]
    fn test_numbered_items_start_their_own_line() {
        assert_eq!(
            format_as_paragraph("Intro\n1. First\n2. Second"),
            "Intro\n1. First\n2. Second"
        );
    }

    #[test]
    fn test_non_ascii_digits_are_not_list_items() {
        assert_eq!(
            format_as_paragraph("مقدمة\n١. البند الأول"),
            "مقدمة ١. البند الأول"
        );
    }

    #[test]
    fn test_bom_is_trimmed() {
        assert_eq!(format_as_paragraph("\u{feff}Hello\n\u{feff}\nworld\u{feff}"), "Hello world");
    }

    #[test]
    fn test_hyphen_items_start_their_own_line() {
        assert_eq!(
            format_as_paragraph("You will need:\n- an ID\n- a signed form\nThanks."),
            "You will need:\n- an ID\n- a signed form Thanks."
        );
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        assert_eq!(
            format_as_paragraph("  first  \r\n\r\n\r\nsecond\r\n"),
            "first second"
        );
    }

    #[test]
    fn test_single_asterisks_removed() {
        assert_eq!(format_as_paragraph("*italic* and * stray"), "italic and  stray");
    }

    #[test]
    fn test_bold_list_item_detected_after_stripping() {
        assert_eq!(
            format_as_paragraph("Steps\n**1.** File the claim"),
            "Steps\n1. File the claim"
        );
    }

    #[test]
    fn test_leading_list_item_is_trimmed() {
        assert_eq!(format_as_paragraph("1. Only item"), "1. Only item");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_as_paragraph(""), "");
        assert_eq!(format_as_paragraph("\n \r\n\t"), "");
    }
}

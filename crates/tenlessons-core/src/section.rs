//! Label-based section extraction from raw model output.
//!
//! The teaching prompt asks the model to mark each part of the curriculum
//! with a bracketed tag like `[LESSON2]`. The model is never guaranteed to
//! comply, so extraction is best effort: a missing label yields an empty
//! string, never an error.

use regex::Regex;

/// Extract the text belonging to a labeled section.
///
/// Grammar: the literal tag `[LABEL]` anywhere in the text (followed by an
/// optional colon) starts capture; capture ends at the next `[` at a line
/// start, or at end of text. The captured text is returned trimmed.
///
/// Returns an empty string when the label is not present. No partial or
/// fuzzy matching.
pub fn extract_section(full_text: &str, label: &str) -> String {
    let pattern = format!(
        r"(?ms)\[{}\]\s*:?[ \t]*(.*?)(?:^\[|\z)",
        regex::escape(label)
    );
    let Ok(re) = Regex::new(&pattern) else {
        return String::new();
    };

    re.captures(full_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

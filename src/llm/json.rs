//! JSON string-array extraction for LLM responses.
//!
//! Models asked for "only a JSON array" still wrap it in prose or markdown
//! fairly often. Parsing is strict first, then falls back to pulling the first
//! array-of-strings-looking span out of the surrounding text.

use std::sync::LazyLock;

use regex_lite::Regex;

/// First `["...", "..."]` span. The first element may contain escaped quotes;
/// later elements may not.
static STRING_ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\["(?:[^"\\]|\\.)*"(?:,\s*"[^"\\]*")*\]"#).expect("Invalid regex")
});

/// Parse `text` as exactly a JSON array of strings.
///
/// Fails on anything else, including arrays with non-string elements.
pub fn parse_string_array(text: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Find the first string-array span in `text` and parse it.
///
/// Returns `None` when no span matches or the matched span is not valid JSON.
pub fn extract_string_array(text: &str) -> Option<Vec<String>> {
    let candidate = STRING_ARRAY_RE.find(text)?;
    parse_string_array(candidate.as_str()).ok()
}

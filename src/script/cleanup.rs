//! Script text cleanup.
//!
//! Removes the formatting models add despite being told not to: emphasis and
//! heading markers, bracketed stage directions, parenthesized asides, and
//! wrapping quotes.

use std::sync::LazyLock;

use regex_lite::Regex;

// `.` stops at newlines, so each pattern works line by line.
static GREEDY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*\]").expect("Invalid regex"));
static GREEDY_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*\)").expect("Invalid regex"));
static MINIMAL_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("Invalid regex"));
static MINIMAL_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("Invalid regex"));

/// How bracket and parenthesis spans are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CleanupMode {
    /// Remove from the first opening to the last closing delimiter on a line.
    /// `"A [x] B [y] C"` becomes `"A  C"`.
    #[default]
    Greedy,
    /// Remove each delimited span separately.
    /// `"A [x] B [y] C"` becomes `"A  B  C"`.
    Minimal,
}

/// Clean a raw model response into script text.
///
/// Steps, in order: drop `*`; drop `#`; remove `[...]` spans; remove `(...)`
/// spans; strip one leading and one trailing `"`; trim whitespace.
pub fn clean_script(raw: &str, mode: CleanupMode) -> String {
    let (brackets, parens) = match mode {
        CleanupMode::Greedy => (&*GREEDY_BRACKETS, &*GREEDY_PARENS),
        CleanupMode::Minimal => (&*MINIMAL_BRACKETS, &*MINIMAL_PARENS),
    };

    let unmarked = raw.replace('*', "").replace('#', "");
    let without_brackets = brackets.replace_all(&unmarked, "");
    let without_parens = parens.replace_all(&without_brackets, "");

    let mut text: &str = &without_parens;
    text = text.strip_prefix('"').unwrap_or(text);
    text = text.strip_suffix('"').unwrap_or(text);

    text.trim().to_string()
}

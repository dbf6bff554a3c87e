//! Internal string primitives shared by the marker and place parsers.
//!
//! The generator output is markdown-ish prose, so most helpers deal with
//! emphasis characters, list markers and the dash separators it uses
//! between fields.

use std::sync::LazyLock;

use regex::Regex;

/// Leading heading hashes (`###`) and/or a numbered (`1.`, `2)`) or bulleted
/// (`-`, `*`, `•`, `+`) list marker. Each must be followed by whitespace so
/// `**bold**` is not mistaken for one.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:#{1,6}[ \t]+)?(?:(?:\d{1,3}[.)]|[-*•+])[ \t]+)?")
        .expect("valid list marker regex")
});

/// Field separator inside a headline or address line.
///
/// Em and en dashes separate anywhere; a plain hyphen only when preceded by
/// whitespace, so hyphenated names and ranges like `08-22` survive.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[—–]\s*|\s+-\s*").expect("valid separator regex"));

const EMPHASIS: &[char] = &['*', '_'];

const QUOTES: &[char] = &['"', '\'', '“', '”', '„', '«', '»', '‘', '’'];

/// Removes leading heading hashes and a list marker, if any.
pub(crate) fn strip_list_marker(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Trims whitespace and surrounding emphasis characters.
pub(crate) fn trim_emphasis(s: &str) -> &str {
    s.trim().trim_matches(EMPHASIS).trim()
}

/// Removes every `*` and `_` and trims. Used for labels and names where
/// emphasis can wrap any part of the text (`**Adresa:** ...`).
pub(crate) fn remove_emphasis(s: &str) -> String {
    s.replace(EMPHASIS, "").trim().to_string()
}

/// Splits `s` at the first field separator into `(before, after)`.
pub(crate) fn split_at_separator(s: &str) -> Option<(&str, &str)> {
    SEPARATOR
        .find(s)
        .map(|m| (&s[..m.start()], &s[m.end()..]))
}

/// Case-insensitive ASCII prefix strip. `prefix` must be ASCII.
pub(crate) fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Removes at most one leading and one trailing quotation character.
pub(crate) fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    let s = s.strip_prefix(QUOTES).unwrap_or(s);
    let s = s.strip_suffix(QUOTES).unwrap_or(s);
    s.trim()
}

/// Returns `Some(trimmed)` for non-blank input.
pub(crate) fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

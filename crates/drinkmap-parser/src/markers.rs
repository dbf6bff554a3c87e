//! Section marker location.
//!
//! A model answer is divided by two localized headers ("Gdje popiti",
//! "Gdje kupiti") and an optional closing disclaimer ("Cijene su procjene").
//! Headers are matched either on a line of their own, with optional heading
//! hashes, list marker and emphasis noise, or inline when wrapped in
//! emphasis. A missing closing emphasis marker is tolerated.

use std::sync::LazyLock;

use regex::Regex;

static DRINK_HEADER: LazyLock<Regex> = LazyLock::new(|| header_regex("gdje", "popiti"));

static BUY_HEADER: LazyLock<Regex> = LazyLock::new(|| header_regex("gdje", "kupiti"));

static DISCLAIMER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[*_]*cijene[ \t]+su[ \t]+procjene").expect("valid disclaimer regex")
});

fn header_regex(first: &str, second: &str) -> Regex {
    let phrase = format!(r"{first}[ \t]+{second}");
    let pattern = format!(
        r"(?im)^[ \t]*(?:#{{1,6}}[ \t]*)?(?:(?:\d{{1,3}}[.)]|[-*•+])[ \t]+)?[*_]*[ \t]*{phrase}[ \t]*[*_]*[ \t]*:?[ \t]*[*_]*[ \t\r]*$|[*_]+[ \t]*{phrase}[ \t]*:?[ \t]*[*_]*"
    );
    Regex::new(&pattern).expect("valid header regex")
}

/// The structural markers, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkerKind {
    DrinkHeader,
    BuyHeader,
    Disclaimer,
}

impl MarkerKind {
    fn regex(self) -> &'static Regex {
        match self {
            Self::DrinkHeader => &DRINK_HEADER,
            Self::BuyHeader => &BUY_HEADER,
            Self::Disclaimer => &DISCLAIMER,
        }
    }
}

/// A located marker. `start..end` is the byte span of the matched header
/// text, including any emphasis or list noise around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub start: usize,
    pub end: usize,
}

/// Finds the first `kind` marker starting at or after byte offset `from`.
///
/// Returns `None` when `from` is past the end of `text` or not on a char
/// boundary.
#[must_use]
pub fn find_marker(text: &str, kind: MarkerKind, from: usize) -> Option<Marker> {
    if from > text.len() || !text.is_char_boundary(from) {
        return None;
    }
    kind.regex().find_at(text, from).map(|m| Marker {
        kind,
        start: m.start(),
        end: m.end(),
    })
}

/// Locates every marker present in `text`, ordered by position.
///
/// Each header resolves to its first occurrence. The disclaimer is searched
/// only after the last header found, so it can only ever close the answer.
/// Markers sharing a start offset keep [`MarkerKind`] order.
#[must_use]
pub fn locate_markers(text: &str) -> Vec<Marker> {
    let mut markers: Vec<Marker> = [MarkerKind::DrinkHeader, MarkerKind::BuyHeader]
        .into_iter()
        .filter_map(|kind| find_marker(text, kind, 0))
        .collect();

    let disclaimer_from = markers.iter().map(|m| m.end).max().unwrap_or(0);
    if let Some(disclaimer) = find_marker(text, MarkerKind::Disclaimer, disclaimer_from) {
        markers.push(disclaimer);
    }

    markers.sort_by_key(|m| (m.start, m.kind));
    markers
}

#[cfg(test)]
#[path = "markers_test.rs"]
mod tests;

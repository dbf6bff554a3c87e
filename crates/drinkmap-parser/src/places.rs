//! Place-block parsing.
//!
//! A section body is a loosely formatted list of venue cards:
//!
//! ```text
//! 1. Naziv — ★4,5 (120) — 0.3 km
//! Adresa: Ulica 1 — Radno vrijeme: 08-22
//! "Kratki citat iz recenzije"
//! Procjena cijene: ≈ 3 €
//! [Google Maps link]
//! ```
//!
//! The generator is not consistent about list style, so entries are split on
//! numbered/bulleted markers when the section uses them and on blank lines
//! otherwise. Blocks without a usable name are dropped, never reported.

use std::sync::LazyLock;

use drinkmap_core::{Place, ReferenceSet};
use regex::Regex;

use crate::references::resolve_map_link;
use crate::text::{
    non_empty, remove_emphasis, split_at_separator, strip_list_marker, strip_prefix_ci,
    strip_quotes, trim_emphasis,
};

/// Name the generator writes when it has nothing to put in the name slot.
const UNRESOLVED_NAME: &str = "N/A";

/// Literal token the generator emits where a map link belongs, lower-cased.
const MAP_LINK_TOKEN: &str = "[google maps link]";

/// Neutral link used when the generator promised a map link but no
/// reference candidate matched.
pub const MAP_LINK_PLACEHOLDER: &str = "#";

const ADDRESS_LABEL: &str = "adresa:";
const HOURS_LABEL: &str = "radno vrijeme:";
const PRICE_LABEL: &str = "procjena cijene:";

static ENTRY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ \t]*)(?:(\d{1,3}[.)])|[-*•+])[ \t]+\S").expect("valid entry marker regex")
});

/// Star glyph, one-decimal rating, parenthesised review count.
static RATING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[★⭐]\s*(\d[.,]\d)\s*\(\s*(\d+(?:[.,]\d{3})*)").expect("valid rating regex")
});

/// Trailing distance after a separator: `— 0.3 km`, `- 300 m`.
static DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[—–]|\s-)\s*(\d+(?:[.,]\d+)?\s*k?m)\s*$").expect("valid distance regex")
});

/// Parses the body of a place section into venue records, in block order.
///
/// When `references` is supplied, each named place is matched against it to
/// resolve `map_link` (see [`resolve_map_link`]).
#[must_use]
pub fn parse_places(section_text: &str, references: Option<&ReferenceSet>) -> Vec<Place> {
    let blocks = split_blocks(section_text);
    let block_count = blocks.len();

    let places: Vec<Place> = blocks
        .iter()
        .filter_map(|block| match parse_block(block, references) {
            Entry::Resolved(place) => Some(place),
            Entry::Unresolved => {
                tracing::trace!(
                    headline = block.lines.first().copied().unwrap_or_default(),
                    "dropping place block without a usable name"
                );
                None
            }
        })
        .collect();

    tracing::debug!(
        blocks = block_count,
        places = places.len(),
        "parsed place section"
    );
    places
}

/// Outcome of parsing one block.
#[derive(Debug, PartialEq, Eq)]
enum Entry {
    Resolved(Place),
    Unresolved,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Block<'a> {
    lines: Vec<&'a str>,
    /// `false` for prose around a marked list (intro, trailing notes).
    is_entry: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerStyle {
    Numbered,
    Bulleted,
}

#[derive(Debug, Clone, Copy)]
struct ListStyle {
    style: MarkerStyle,
    indent: usize,
}

impl ListStyle {
    fn starts_entry(self, line: &str) -> bool {
        entry_marker(line)
            .is_some_and(|found| found.style == self.style && found.indent <= self.indent)
    }
}

/// Returns the list marker style of `line`, ignoring bulleted field lines
/// such as `- Adresa: ...`.
fn entry_marker(line: &str) -> Option<ListStyle> {
    let caps = ENTRY_MARKER.captures(line)?;
    if is_field_line(line) {
        return None;
    }
    let indent = caps.get(1).map_or(0, |m| m.as_str().len());
    let style = if caps.get(2).is_some() {
        MarkerStyle::Numbered
    } else {
        MarkerStyle::Bulleted
    };
    Some(ListStyle { style, indent })
}

fn split_blocks(section: &str) -> Vec<Block<'_>> {
    let lines: Vec<&str> = section.lines().collect();

    match opening_style(&lines) {
        Some(style) => split_marked(&lines, style),
        None => split_on_gaps(&lines),
    }
}

/// List style of the first marked line that opens a blank-line separated
/// block. Marked lines inside a block, such as bulleted quotes under an
/// unmarked headline, never decide the style.
fn opening_style(lines: &[&str]) -> Option<ListStyle> {
    let mut after_gap = true;
    for &line in lines {
        if line.trim().is_empty() {
            after_gap = true;
            continue;
        }
        if after_gap {
            if let Some(style) = entry_marker(line) {
                return Some(style);
            }
        }
        after_gap = false;
    }
    None
}

/// Plain style: every blank-line separated block is an entry. Bulleted or
/// indented lines inside a block stay with its headline.
fn split_on_gaps<'a>(lines: &[&'a str]) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut current = Block {
        lines: Vec::new(),
        is_entry: true,
    };

    for &line in lines {
        if line.trim().is_empty() {
            flush(&mut blocks, &mut current, true);
        } else {
            current.lines.push(line);
        }
    }
    flush(&mut blocks, &mut current, true);
    blocks
}

/// Marked style: entries start at markers of the detected style. Blank lines
/// inside an entry are tolerated for field lines and indented continuations;
/// any other line after a gap starts a non-entry prose block.
fn split_marked<'a>(lines: &[&'a str], style: ListStyle) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut current = Block::default();
    let mut after_gap = false;

    for &line in lines {
        if line.trim().is_empty() {
            after_gap = true;
            continue;
        }

        if style.starts_entry(line) {
            flush(&mut blocks, &mut current, true);
        } else if after_gap && !is_continuation(line) {
            flush(&mut blocks, &mut current, false);
        }

        current.lines.push(line);
        after_gap = false;
    }
    flush(&mut blocks, &mut current, false);
    blocks
}

fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t']) || is_field_line(line)
}

/// Pushes `current` when it holds lines and resets it with `next_is_entry`.
fn flush<'a>(blocks: &mut Vec<Block<'a>>, current: &mut Block<'a>, next_is_entry: bool) {
    let finished = std::mem::replace(
        current,
        Block {
            lines: Vec::new(),
            is_entry: next_is_entry,
        },
    );
    if !finished.lines.is_empty() {
        blocks.push(finished);
    }
}

fn parse_block(block: &Block<'_>, references: Option<&ReferenceSet>) -> Entry {
    if !block.is_entry {
        return Entry::Unresolved;
    }
    let Some((first, details)) = block.lines.split_first() else {
        return Entry::Unresolved;
    };

    let headline = strip_list_marker(first.trim()).trim();
    let name = headline_name(headline);
    if name.is_empty() || name.eq_ignore_ascii_case(UNRESOLVED_NAME) {
        return Entry::Unresolved;
    }

    let mut place = Place::new(name);
    if let Some(references) = references {
        place.map_link = resolve_map_link(&place.name, references).map(str::to_string);
    }
    if let Some((rating, reviews)) = parse_rating(headline) {
        place.rating = Some(rating);
        place.reviews = Some(reviews);
    }
    place.distance = parse_distance(headline);

    let mut quote_lines: Vec<String> = Vec::new();
    for line in details {
        apply_detail(&mut place, &mut quote_lines, line);
    }
    place.quote = non_empty(strip_quotes(&quote_lines.join(" ")));

    Entry::Resolved(place)
}

/// The portion of the headline before the first separator, without emphasis.
fn headline_name(headline: &str) -> String {
    let raw = split_at_separator(headline).map_or(headline, |(before, _)| before);
    remove_emphasis(raw)
}

/// Returns `(rating, reviews)` when both are present in the headline.
fn parse_rating(headline: &str) -> Option<(String, String)> {
    let caps = RATING.captures(headline)?;
    let rating = caps.get(1)?.as_str().to_string();
    let reviews: String = caps
        .get(2)?
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    Some((rating, reviews))
}

fn parse_distance(headline: &str) -> Option<String> {
    DISTANCE
        .captures(trim_emphasis(headline))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Classification of a non-headline line, computed on its emphasis-free form.
#[derive(Debug, PartialEq, Eq)]
enum Detail<'a> {
    Address(&'a str),
    Hours(&'a str),
    Price(&'a str),
    MapLinkPlaceholder,
    Other,
}

fn classify_detail(plain: &str) -> Detail<'_> {
    if let Some(rest) = strip_prefix_ci(plain, ADDRESS_LABEL) {
        Detail::Address(rest)
    } else if let Some(rest) = strip_prefix_ci(plain, HOURS_LABEL) {
        Detail::Hours(rest)
    } else if let Some(rest) = strip_prefix_ci(plain, PRICE_LABEL) {
        Detail::Price(rest)
    } else if plain.to_lowercase().contains(MAP_LINK_TOKEN) {
        Detail::MapLinkPlaceholder
    } else {
        Detail::Other
    }
}

fn is_field_line(line: &str) -> bool {
    let plain = remove_emphasis(strip_list_marker(line.trim()));
    classify_detail(&plain) != Detail::Other
}

fn apply_detail(place: &mut Place, quote_lines: &mut Vec<String>, line: &str) {
    let stripped = strip_list_marker(line.trim());
    let plain = remove_emphasis(stripped);

    match classify_detail(&plain) {
        Detail::Address(rest) => {
            let (address, hours) = match split_at_separator(rest) {
                Some((address, hours)) => (address, Some(hours)),
                None => (rest, None),
            };
            place.address = non_empty(address);
            if let Some(hours) = hours.and_then(|h| non_empty(strip_hours_label(h))) {
                place.hours = Some(hours);
            }
        }
        Detail::Hours(rest) => place.hours = non_empty(rest),
        Detail::Price(rest) => place.price = non_empty(rest),
        Detail::MapLinkPlaceholder => {
            if place.map_link.is_none() {
                place.map_link = Some(MAP_LINK_PLACEHOLDER.to_string());
            }
        }
        Detail::Other => {
            if let Some(text) = non_empty(trim_emphasis(stripped)) {
                quote_lines.push(text);
            }
        }
    }
}

fn strip_hours_label(s: &str) -> &str {
    let s = s.trim();
    strip_prefix_ci(s, HOURS_LABEL).unwrap_or(s)
}

#[cfg(test)]
#[path = "places_test.rs"]
mod tests;

//! Segment extraction from a completed model answer.

use drinkmap_core::{ReferenceSet, Segment, BUY_TITLE, DRINK_TITLE};

use crate::markers::{locate_markers, Marker, MarkerKind};
use crate::places::parse_places;
use crate::text::trim_emphasis;

/// Splits `full_text` into ordered, renderable segments.
///
/// 1. Text before the first marker becomes the summary.
/// 2. Each header's body, up to the next marker, is parsed into a place list.
/// 3. The disclaimer runs to the end of the text.
///
/// Empty text and empty place lists are never returned. When nothing at all
/// is extracted from non-blank input, the whole trimmed text is returned as
/// a single text segment.
#[must_use]
pub fn extract(full_text: &str, references: &ReferenceSet) -> Vec<Segment> {
    let markers = locate_markers(full_text);
    tracing::debug!(
        chars = full_text.len(),
        markers = ?markers.iter().map(|m| m.kind).collect::<Vec<_>>(),
        "extracting segments"
    );

    let summary_end = markers.first().map_or(full_text.len(), |m| m.start);
    let mut segments: Vec<Segment> = Segment::text(&full_text[..summary_end])
        .into_iter()
        .collect();

    for (idx, marker) in markers.iter().enumerate() {
        let section_end = markers.get(idx + 1).map_or(full_text.len(), |next| next.start);
        if let Some(segment) = section_segment(full_text, marker, section_end, references) {
            segments.push(segment);
        }
    }

    if segments.is_empty() {
        if let Some(fallback) = Segment::text(full_text) {
            tracing::debug!("no structure recognised, falling back to plain text");
            segments.push(fallback);
        }
    }

    segments.retain(Segment::is_renderable);
    segments
}

fn section_segment(
    full_text: &str,
    marker: &Marker,
    section_end: usize,
    references: &ReferenceSet,
) -> Option<Segment> {
    let title = match marker.kind {
        MarkerKind::DrinkHeader => DRINK_TITLE,
        MarkerKind::BuyHeader => BUY_TITLE,
        MarkerKind::Disclaimer => {
            return Segment::text(trim_emphasis(&full_text[marker.start..]));
        }
    };

    // Adjacent emphasis can make neighbouring matches share characters.
    let body = &full_text[marker.end..section_end.max(marker.end)];
    let places = parse_places(body, Some(references));
    if places.is_empty() {
        tracing::debug!(title, "section produced no places, omitting");
    }
    Segment::places(title, places)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;

//! Plain-text rendering of a model turn for copy and share actions.

use std::fmt::Write as _;

use crate::segment::{Place, Segment};

/// Renders `segments` as copyable plain text.
///
/// Image segments are skipped. Returns an empty string when nothing
/// renderable remains.
#[must_use]
pub fn message_text(segments: &[Segment]) -> String {
    let mut out = String::new();

    for segment in segments {
        match segment {
            Segment::Text { content } => {
                out.push_str(content);
                out.push_str("\n\n");
            }
            Segment::Places { title, places } => {
                let _ = writeln!(out, "{title}:");
                for place in places {
                    write_place(&mut out, place);
                }
            }
            Segment::Error { message } => {
                let _ = write!(out, "GREŠKA: {message}\n\n");
            }
            Segment::Image { .. } => {}
        }
    }

    out.trim().to_string()
}

fn write_place(out: &mut String, place: &Place) {
    let _ = write!(out, "- {}", place.name);
    if let (Some(rating), Some(reviews)) = (&place.rating, &place.reviews) {
        let _ = write!(out, " Ocjena: {rating} ({reviews} recenzija)");
    }
    if let Some(distance) = &place.distance {
        let _ = write!(out, " Udaljenost: {distance}");
    }
    out.push('\n');

    if let Some(address) = &place.address {
        let _ = writeln!(out, "  Adresa: {address}");
    }
    if let Some(hours) = &place.hours {
        let _ = writeln!(out, "  Radno vrijeme: {hours}");
    }
    if let Some(price) = &place.price {
        let _ = writeln!(out, "  Procjena cijene: {price}");
    }
    if let Some(quote) = &place.quote {
        let _ = writeln!(out, "  \"{quote}\"");
    }
    out.push('\n');
}

/// Builds the share message for a single place recommendation.
#[must_use]
pub fn share_text(place: &Place) -> String {
    format!(
        "Evo preporuke za piće: {}\nAdresa: {}",
        place.name,
        place.address.as_deref().unwrap_or("Nije dostupna")
    )
}

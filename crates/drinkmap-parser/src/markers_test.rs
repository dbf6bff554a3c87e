use super::*;

// -----------------------------------------------------------------------
// find_marker
// -----------------------------------------------------------------------

#[test]
fn drink_header_bold_on_own_line() {
    let text = "Uvod\n**Gdje popiti**\n1. Bar";
    let m = find_marker(text, MarkerKind::DrinkHeader, 0).unwrap();
    assert_eq!(&text[m.start..m.end], "**Gdje popiti**");
}

#[test]
fn drink_header_is_case_insensitive() {
    let text = "**GDJE POPITI**";
    assert!(find_marker(text, MarkerKind::DrinkHeader, 0).is_some());
}

#[test]
fn header_with_heading_hashes_and_colon() {
    let text = "Uvod\n### Gdje kupiti:\n- Konzum";
    let m = find_marker(text, MarkerKind::BuyHeader, 0).unwrap();
    assert_eq!(&text[m.start..m.end], "### Gdje kupiti:");
}

#[test]
fn header_with_list_noise() {
    let text = "Uvod\n2. **Gdje kupiti**\n- Konzum";
    let m = find_marker(text, MarkerKind::BuyHeader, 0).unwrap();
    assert_eq!(&text[m.start..m.end], "2. **Gdje kupiti**");
}

#[test]
fn header_missing_closing_emphasis_is_tolerated() {
    let text = "Uvod\n**Gdje popiti\n1. Bar — 1 km";
    let m = find_marker(text, MarkerKind::DrinkHeader, 0).unwrap();
    assert_eq!(&text[m.start..m.end], "**Gdje popiti");
}

#[test]
fn inline_emphasized_header_matches() {
    let text = "Evo prijedloga. **Gdje popiti:** Bar A — 1 km";
    let m = find_marker(text, MarkerKind::DrinkHeader, 0).unwrap();
    assert_eq!(&text[m.start..m.end], "**Gdje popiti:**");
}

#[test]
fn plain_prose_mention_is_not_a_header() {
    let text = "Ne znam gdje popiti Guinness u ovo doba.";
    assert!(find_marker(text, MarkerKind::DrinkHeader, 0).is_none());
}

#[test]
fn question_line_is_not_a_header() {
    let text = "Gdje popiti dobar espresso?\nPreporučujem centar.";
    assert!(find_marker(text, MarkerKind::DrinkHeader, 0).is_none());
}

#[test]
fn find_marker_respects_lower_bound() {
    let text = "**Gdje popiti**\nA — 1 km\n**Gdje popiti**\nB — 2 km";
    let first = find_marker(text, MarkerKind::DrinkHeader, 0).unwrap();
    let second = find_marker(text, MarkerKind::DrinkHeader, first.end).unwrap();
    assert_eq!(first.start, 0);
    assert!(second.start > first.end);
    assert_eq!(&text[second.start..second.end], "**Gdje popiti**");
}

#[test]
fn find_marker_out_of_range_lower_bound() {
    assert!(find_marker("**Gdje popiti**", MarkerKind::DrinkHeader, 100).is_none());
}

#[test]
fn find_marker_non_boundary_lower_bound() {
    // "Š" is two bytes; offset 1 falls inside it.
    assert!(find_marker("Š **Gdje popiti**", MarkerKind::DrinkHeader, 1).is_none());
}

#[test]
fn disclaimer_includes_leading_emphasis() {
    let text = "Kraj.\n*Cijene su procjene temeljene na recenzijama.*";
    let m = find_marker(text, MarkerKind::Disclaimer, 0).unwrap();
    assert!(text[m.start..].starts_with("*Cijene su procjene"));
}

// -----------------------------------------------------------------------
// locate_markers
// -----------------------------------------------------------------------

#[test]
fn locate_markers_orders_by_position() {
    let text = "Uvod\n**Gdje kupiti**\nK\n**Gdje popiti**\nP\nCijene su procjene.";
    let kinds: Vec<MarkerKind> = locate_markers(text).iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MarkerKind::BuyHeader,
            MarkerKind::DrinkHeader,
            MarkerKind::Disclaimer
        ]
    );
}

#[test]
fn locate_markers_ignores_disclaimer_before_headers() {
    let text = "Cijene su procjene, ali evo:\n**Gdje popiti**\nBar — 1 km";
    let markers = locate_markers(text);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].kind, MarkerKind::DrinkHeader);
}

#[test]
fn locate_markers_finds_disclaimer_without_headers() {
    let text = "Nemam podataka.\nCijene su procjene.";
    let markers = locate_markers(text);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].kind, MarkerKind::Disclaimer);
}

#[test]
fn locate_markers_empty_text() {
    assert!(locate_markers("").is_empty());
}

//! Map link resolution against cited reference candidates.

use drinkmap_core::ReferenceSet;

/// Returns the URI of the first reference whose title and `name` contain one
/// another, compared case-insensitively.
///
/// Candidates are tried in the order given; a later, more specific title
/// never displaces an earlier match. Blank names and blank titles never match.
#[must_use]
pub fn resolve_map_link<'a>(name: &str, references: &'a ReferenceSet) -> Option<&'a str> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    references
        .iter()
        .find(|reference| {
            let title = reference.title.trim().to_lowercase();
            !title.is_empty() && (title.contains(&name) || name.contains(&title))
        })
        .map(|reference| reference.uri.as_str())
}

#[cfg(test)]
mod tests {
    use drinkmap_core::Reference;

    use super::*;

    fn refs(pairs: &[(&str, &str)]) -> ReferenceSet {
        pairs
            .iter()
            .map(|(uri, title)| Reference::new(*uri, *title))
            .collect()
    }

    #[test]
    fn exact_title_match() {
        let set = refs(&[("https://maps/x", "Caffe Bar X")]);
        assert_eq!(resolve_map_link("Caffe Bar X", &set), Some("https://maps/x"));
    }

    #[test]
    fn title_containing_name_matches_case_insensitively() {
        let set = refs(&[("https://maps/x", "CAFFE BAR X - Google Maps")]);
        assert_eq!(resolve_map_link("caffe bar x", &set), Some("https://maps/x"));
    }

    #[test]
    fn name_containing_title_matches() {
        let set = refs(&[("https://maps/k", "Konzum")]);
        assert_eq!(
            resolve_map_link("Konzum Ilica 12", &set),
            Some("https://maps/k")
        );
    }

    #[test]
    fn first_match_wins_over_more_specific_later_title() {
        let set = refs(&[
            ("https://maps/generic", "Bar"),
            ("https://maps/specific", "Caffe Bar X"),
        ]);
        assert_eq!(
            resolve_map_link("Caffe Bar X", &set),
            Some("https://maps/generic")
        );
    }

    #[test]
    fn no_match_returns_none() {
        let set = refs(&[("https://maps/y", "Pivnica Y")]);
        assert!(resolve_map_link("Caffe Bar X", &set).is_none());
    }

    #[test]
    fn blank_name_never_matches() {
        let set = refs(&[("https://maps/y", "Pivnica Y")]);
        assert!(resolve_map_link("  ", &set).is_none());
    }

    #[test]
    fn empty_set_returns_none() {
        assert!(resolve_map_link("Caffe Bar X", &ReferenceSet::new()).is_none());
    }
}

//! Reference candidates attached to a model turn by the transport layer.

use serde::{Deserialize, Serialize};

/// A `(uri, title)` pair cited by the generator, used to resolve map links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub uri: String,
    pub title: String,
}

impl Reference {
    #[must_use]
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}

/// Ordered set of reference candidates. Order is significant: the first
/// matching candidate wins during map link resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Reference>")]
pub struct ReferenceSet(Vec<Reference>);

impl ReferenceSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw candidates, keeping only those with both a
    /// non-blank URI and a non-blank title. Input order is preserved.
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Reference>,
    {
        Self(
            candidates
                .into_iter()
                .filter(|r| !r.uri.trim().is_empty() && !r.title.trim().is_empty())
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reference> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReferenceSet {
    type Item = &'a Reference;
    type IntoIter = std::slice::Iter<'a, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Reference>> for ReferenceSet {
    fn from(candidates: Vec<Reference>) -> Self {
        Self::from_candidates(candidates)
    }
}

impl FromIterator<Reference> for ReferenceSet {
    fn from_iter<T: IntoIterator<Item = Reference>>(iter: T) -> Self {
        Self::from_candidates(iter)
    }
}

use drinkmap_core::ReferenceSet;
use serde::{Deserialize, Serialize};

/// One incremental piece of a streamed model answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    #[serde(default)]
    pub text: String,
    /// Reference candidates valid so far. Usually only the final fragment
    /// carries them; the last one seen wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<ReferenceSet>,
}

impl Fragment {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            references: None,
        }
    }

    #[must_use]
    pub fn with_references(mut self, references: ReferenceSet) -> Self {
        self.references = Some(references);
        self
    }
}

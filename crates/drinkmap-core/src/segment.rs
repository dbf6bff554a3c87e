use serde::{Deserialize, Serialize};

/// Title of the "where to drink" place list.
pub const DRINK_TITLE: &str = "Gdje popiti";

/// Title of the "where to buy" place list.
pub const BUY_TITLE: &str = "Gdje kupiti";

/// One typed, ordered unit of a model turn's rendered output.
///
/// Serialized with an internal `type` tag so the presentation layer can
/// switch on it directly: `text`, `locations`, `error`, `user-image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Segment {
    /// Free prose. Never empty after trimming once it leaves the extractor.
    Text { content: String },
    /// A titled, non-empty list of recommended venues.
    #[serde(rename = "locations")]
    Places { title: String, places: Vec<Place> },
    /// A human-readable failure notice shown in place of a model turn.
    Error { message: String },
    /// A user-supplied image preview (data URL). Never produced by the extractor.
    #[serde(rename = "user-image")]
    Image { url: String },
}

impl Segment {
    /// Builds a text segment from trimmed `content`, or `None` when nothing
    /// is left after trimming.
    #[must_use]
    pub fn text(content: &str) -> Option<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::Text {
                content: trimmed.to_string(),
            })
        }
    }

    /// Builds a place list segment, or `None` when `places` is empty.
    #[must_use]
    pub fn places(title: &str, places: Vec<Place>) -> Option<Self> {
        if places.is_empty() {
            None
        } else {
            Some(Self::Places {
                title: title.to_string(),
                places,
            })
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Returns `false` for empty text and empty place lists.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        match self {
            Self::Text { content } => !content.trim().is_empty(),
            Self::Places { places, .. } => !places.is_empty(),
            Self::Error { .. } | Self::Image { .. } => true,
        }
    }
}

/// A structured venue recommendation extracted from prose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    /// One-decimal rating exactly as written, e.g. `"4,5"`. Set together with `reviews`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Review count as a digit string. Set together with `rating`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<String>,
    /// Free-form distance such as `"1.2 km"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    /// Free-form price estimate such as `"≈ 3–4 € / čaša"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Review excerpt with surrounding quotation characters removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
    /// Card expansion state. Owned by the presentation layer.
    #[serde(default)]
    pub expanded: bool,
}

impl Place {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}

//! One conversational turn: aggregate, then extract.

use drinkmap_core::Segment;
use futures::Stream;

use crate::aggregator::aggregate;
use crate::cancel::CancelHandle;
use crate::error::{StreamError, TransportError};
use crate::failure::failure_message;
use crate::fragment::Fragment;

/// Final state of an assistant message after its stream ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Extracted segments, never empty.
    Segments(Vec<Segment>),
    /// The stream finished without any non-blank text; the caller removes
    /// the placeholder message.
    Empty,
    /// The stream aborted; holds a single error segment.
    Failed(Segment),
    /// The caller cancelled the turn; nothing is rendered.
    Cancelled,
}

impl TurnOutcome {
    /// Segments to store on the finished message.
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        match self {
            Self::Segments(segments) => segments,
            Self::Failed(error) => vec![error],
            Self::Empty | Self::Cancelled => Vec::new(),
        }
    }
}

/// Drives a fragment stream to completion and interprets the final text.
///
/// `on_live` receives the growing raw buffer after every fragment. Structured
/// extraction runs exactly once, after the stream completes successfully.
pub async fn interpret_turn<S, E, F>(fragments: S, cancel: &CancelHandle, on_live: F) -> TurnOutcome
where
    S: Stream<Item = Result<Fragment, E>>,
    E: Into<TransportError>,
    F: FnMut(&str),
{
    let aggregated = match aggregate(fragments, cancel, on_live).await {
        Ok(aggregated) => aggregated,
        Err(StreamError::Cancelled { .. }) => return TurnOutcome::Cancelled,
        Err(StreamError::Transport { fragments, source }) => {
            let message = failure_message(&source.to_string());
            tracing::warn!(fragments, error = %source, message, "turn failed");
            return TurnOutcome::Failed(Segment::error(message));
        }
    };

    let references = aggregated.references_or_empty();
    let segments = drinkmap_parser::extract(&aggregated.text, &references);
    if segments.is_empty() {
        tracing::debug!(fragments = aggregated.fragments, "turn produced no text");
        return TurnOutcome::Empty;
    }

    tracing::info!(
        fragments = aggregated.fragments,
        segments = segments.len(),
        "turn interpreted"
    );
    TurnOutcome::Segments(segments)
}

#[cfg(test)]
#[path = "turn_test.rs"]
mod tests;

//! Incremental aggregation of streamed fragments.

use drinkmap_core::ReferenceSet;
use futures::{Stream, StreamExt};

use crate::cancel::CancelHandle;
use crate::error::{StreamError, TransportError};
use crate::fragment::Fragment;

/// Everything a completed stream produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregated {
    /// Concatenation of every fragment's text, in arrival order.
    pub text: String,
    /// References from the last fragment that carried any.
    pub references: Option<ReferenceSet>,
    /// Number of fragments received.
    pub fragments: usize,
}

impl Aggregated {
    /// References to resolve map links against; empty when none arrived.
    #[must_use]
    pub fn references_or_empty(&self) -> ReferenceSet {
        self.references.clone().unwrap_or_default()
    }
}

/// Folds `fragments` into a single buffer.
///
/// After each fragment is appended, `on_live` receives the whole buffer so
/// far, so the caller always sees monotonically growing text. No parsing
/// happens here.
///
/// # Errors
///
/// Returns [`StreamError::Transport`] when the stream yields an error; the
/// partial buffer is discarded. Returns [`StreamError::Cancelled`] when
/// `cancel` fires while waiting for the next fragment.
pub async fn aggregate<S, E, F>(
    fragments: S,
    cancel: &CancelHandle,
    mut on_live: F,
) -> Result<Aggregated, StreamError>
where
    S: Stream<Item = Result<Fragment, E>>,
    E: Into<TransportError>,
    F: FnMut(&str),
{
    let mut fragments = std::pin::pin!(fragments);
    let mut aggregated = Aggregated::default();

    loop {
        let next = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!(fragments = aggregated.fragments, "aggregation cancelled");
                return Err(StreamError::Cancelled {
                    fragments: aggregated.fragments,
                });
            }
            next = fragments.next() => next,
        };

        let Some(item) = next else {
            break;
        };

        match item {
            Ok(fragment) => {
                aggregated.fragments += 1;
                aggregated.text.push_str(&fragment.text);
                if let Some(references) = fragment.references {
                    aggregated.references = Some(references);
                }
                tracing::trace!(
                    fragment = aggregated.fragments,
                    chars = aggregated.text.len(),
                    "fragment appended"
                );
                on_live(&aggregated.text);
            }
            Err(source) => {
                let source = source.into();
                tracing::warn!(
                    fragments = aggregated.fragments,
                    error = %source,
                    "fragment stream failed"
                );
                return Err(StreamError::Transport {
                    fragments: aggregated.fragments,
                    source,
                });
            }
        }
    }

    tracing::debug!(
        fragments = aggregated.fragments,
        chars = aggregated.text.len(),
        references = aggregated.references.as_ref().map_or(0, ReferenceSet::len),
        "fragment stream complete"
    );
    Ok(aggregated)
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;

use thiserror::Error;

/// Boxed failure reported by the upstream fragment producer.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum StreamError {
    /// The fragment producer aborted. Text received so far is discarded.
    #[error("transport failed after {fragments} fragment(s): {source}")]
    Transport {
        fragments: usize,
        #[source]
        source: TransportError,
    },

    /// The caller abandoned the turn before the stream finished.
    #[error("turn cancelled after {fragments} fragment(s)")]
    Cancelled { fragments: usize },
}

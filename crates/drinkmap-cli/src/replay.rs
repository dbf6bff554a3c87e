//! `replay` command: feed a recorded fragment stream through a full turn.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use drinkmap_core::Segment;
use drinkmap_stream::{interpret_turn, CancelHandle, TurnOutcome};
use futures::StreamExt;
use serde::Serialize;

use crate::extract::print_json;
use crate::input::{parse_replay_lines, read_source};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ReplayOptions {
    pub delay_ms: u64,
    pub show_live: bool,
    pub pretty: bool,
}

/// JSON shape printed once the turn finishes.
#[derive(Debug, Serialize)]
struct TurnReport {
    outcome: &'static str,
    segments: Vec<Segment>,
}

impl From<TurnOutcome> for TurnReport {
    fn from(outcome: TurnOutcome) -> Self {
        let label = match &outcome {
            TurnOutcome::Segments(_) => "segments",
            TurnOutcome::Empty => "empty",
            TurnOutcome::Failed(_) => "failed",
            TurnOutcome::Cancelled => "cancelled",
        };
        Self {
            outcome: label,
            segments: outcome.into_segments(),
        }
    }
}

/// Replays the NDJSON fragments in `path` and prints the final turn report.
///
/// Ctrl-C cancels the turn at the next fragment boundary.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is not a valid
/// fragment record. A recorded transport failure is reported in the output,
/// not returned.
pub(crate) async fn run_replay(path: &Path, options: ReplayOptions) -> anyhow::Result<()> {
    let lines = parse_replay_lines(&read_source(path)?)?;
    tracing::info!(
        fragments = lines.len(),
        delay_ms = options.delay_ms,
        "replaying fragment stream"
    );

    let cancel = CancelHandle::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupt received, cancelling turn");
                cancel.cancel();
            }
        })
    };

    let delay = Duration::from_millis(options.delay_ms);
    let fragments = futures::stream::iter(lines).then(move |line| async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        line.into_result()
    });

    let mut shown = 0;
    let outcome = interpret_turn(fragments, &cancel, |live| {
        if options.show_live {
            let mut stderr = std::io::stderr().lock();
            // Write errors on a closed stderr are ignored.
            let _ = stderr.write_all(live[shown..].as_bytes());
            let _ = stderr.flush();
        }
        shown = live.len();
    })
    .await;
    ctrl_c.abort();

    if options.show_live && shown > 0 {
        eprintln!();
    }
    print_json(&TurnReport::from(outcome), options.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_labels_each_outcome() {
        let failed = TurnReport::from(TurnOutcome::Failed(Segment::error("x")));
        assert_eq!(failed.outcome, "failed");
        assert_eq!(failed.segments.len(), 1);

        assert_eq!(TurnReport::from(TurnOutcome::Empty).outcome, "empty");
        assert_eq!(TurnReport::from(TurnOutcome::Cancelled).outcome, "cancelled");
    }

    #[test]
    fn report_serializes_segments_with_type_tags() {
        let report = TurnReport::from(TurnOutcome::Segments(vec![Segment::Text {
            content: "Bok".to_string(),
        }]));
        let json = serde_json::to_value(&report).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "outcome": "segments",
                "segments": [{ "type": "text", "content": "Bok" }]
            })
        );
    }
}

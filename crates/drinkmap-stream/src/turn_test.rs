use drinkmap_core::{Reference, ReferenceSet, DRINK_TITLE};
use futures::stream;

use super::*;
use crate::failure::{GENERIC_MESSAGE, INVALID_KEY_MESSAGE, QUOTA_MESSAGE};

type Item = Result<Fragment, String>;

fn ok(text: &str) -> Item {
    Ok(Fragment::text(text))
}

async fn run(items: Vec<Item>) -> TurnOutcome {
    interpret_turn(stream::iter(items), &CancelHandle::new(), |_| {}).await
}

#[tokio::test]
async fn plain_answer_becomes_single_text_segment() {
    let outcome = run(vec![ok("Preporučujem "), ok("suhi cider.")]).await;
    assert_eq!(
        outcome,
        TurnOutcome::Segments(vec![Segment::Text {
            content: "Preporučujem suhi cider.".to_string()
        }])
    );
}

#[tokio::test]
async fn structured_answer_is_split_after_completion() {
    let refs: ReferenceSet = [Reference::new("https://maps/x", "Caffe Bar X")]
        .into_iter()
        .collect();
    let items: Vec<Item> = vec![
        ok("Super izbor!\n\n**Gdje "),
        ok("popiti**\n1. Caffe Bar X — ★4,5 (120) — 0.3 km\n"),
        Ok(Fragment::text("\nCijene su procjene.").with_references(refs)),
    ];

    let mut snapshots = Vec::new();
    let outcome = interpret_turn(stream::iter(items), &CancelHandle::new(), |text| {
        snapshots.push(text.len());
    })
    .await;

    assert_eq!(snapshots.len(), 3);
    assert!(snapshots.windows(2).all(|w| w[0] < w[1]));

    let segments = outcome.into_segments();
    assert_eq!(segments.len(), 3);
    let Segment::Places { title, places } = &segments[1] else {
        panic!("expected a place list, got {segments:?}");
    };
    assert_eq!(title, DRINK_TITLE);
    assert_eq!(places[0].map_link.as_deref(), Some("https://maps/x"));
}

#[tokio::test]
async fn empty_stream_is_empty_outcome() {
    assert_eq!(run(Vec::new()).await, TurnOutcome::Empty);
}

#[tokio::test]
async fn whitespace_only_stream_is_empty_outcome() {
    assert_eq!(run(vec![ok("  "), ok("\n")]).await, TurnOutcome::Empty);
}

#[tokio::test]
async fn abort_after_partial_text_fails_without_segments() {
    let outcome = run(vec![
        ok("**Gdje popiti**\n"),
        ok("1. Bar A — 1 km"),
        Err("stream reset".to_string()),
    ])
    .await;

    assert_eq!(outcome, TurnOutcome::Failed(Segment::error(GENERIC_MESSAGE)));
}

#[tokio::test]
async fn failure_wording_follows_transport_error() {
    let invalid = run(vec![Err("API key not valid. Please pass a valid API key.".to_string())]).await;
    assert_eq!(invalid, TurnOutcome::Failed(Segment::error(INVALID_KEY_MESSAGE)));

    let quota = run(vec![Err("You exceeded your current quota".to_string())]).await;
    assert_eq!(quota, TurnOutcome::Failed(Segment::error(QUOTA_MESSAGE)));
}

#[tokio::test]
async fn cancelled_turn_renders_nothing() {
    let cancel = CancelHandle::new();
    let outcome = interpret_turn(stream::iter(vec![ok("a"), ok("b")]), &cancel, |_| {
        cancel.cancel();
    })
    .await;

    assert_eq!(outcome, TurnOutcome::Cancelled);
    assert!(outcome.into_segments().is_empty());
}

#[tokio::test]
async fn unparseable_structure_keeps_raw_text() {
    let outcome = run(vec![ok("  **Gdje kupiti**\n"), ok("***\n")]).await;
    assert_eq!(
        outcome,
        TurnOutcome::Segments(vec![Segment::Text {
            content: "**Gdje kupiti**\n***".to_string()
        }])
    );
}

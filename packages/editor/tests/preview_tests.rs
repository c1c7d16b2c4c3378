//! Timing behavior of the debounced preview projector
//!
//! Runs on a paused tokio clock so the quiet windows are exact.

use std::time::Duration;

use serde_json::json;
use tokio::time::{advance, timeout};

use bandstand_editor::{
    Applied, Block, BlockKind, EditSession, Mutation, PageDocument, PreviewProjector,
    PREVIEW_DEBOUNCE,
};

fn session(ids: &[&str]) -> EditSession {
    let document = PageDocument::from_blocks(
        ids.iter()
            .map(|id| Block::with_defaults(*id, BlockKind::Hero))
            .collect(),
    )
    .unwrap();
    EditSession::new("pages/home", document)
}

fn patch(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().unwrap().clone()
}

fn edit(session: &mut EditSession, heading: &str) {
    let applied = session
        .apply(Mutation::UpdateProps {
            block_id: "a".to_string(),
            patch: patch(json!({ "heading": heading })),
        })
        .unwrap();
    assert_eq!(applied, Applied::Changed);
}

#[tokio::test(start_paused = true)]
async fn burst_of_updates_settles_exactly_once_after_quiet_window() {
    let mut s = session(&["a"]);
    let projector = PreviewProjector::spawn(s.subscribe());
    let mut settled = projector.subscribe();

    // 10 updates, 50 ms apart: each one restarts the 300 ms window
    for i in 0..10 {
        edit(&mut s, &format!("heading {i}"));
        advance(Duration::from_millis(50)).await;
        assert!(
            !settled.has_changed().unwrap(),
            "must not emit while changes keep arriving"
        );
    }

    // Quiet period elapses: exactly one emission, carrying the last state
    advance(PREVIEW_DEBOUNCE).await;
    timeout(Duration::from_millis(10), settled.changed())
        .await
        .expect("projector should settle after the quiet window")
        .unwrap();

    let document = settled.borrow_and_update().clone();
    assert_eq!(document, *s.document());

    // And only one: no trailing second emission
    advance(PREVIEW_DEBOUNCE * 2).await;
    assert!(!settled.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn no_emission_before_the_window_elapses() {
    let mut s = session(&["a"]);
    let projector = PreviewProjector::spawn(s.subscribe());
    let settled = projector.subscribe();

    edit(&mut s, "draft");
    advance(PREVIEW_DEBOUNCE - Duration::from_millis(1)).await;

    assert!(!settled.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn live_feed_stays_immediate_while_preview_lags() {
    let mut s = session(&["a", "b"]);
    let mut live = s.subscribe();
    let projector = PreviewProjector::spawn(s.subscribe());
    let settled = projector.subscribe();

    s.apply(Mutation::Reorder {
        source: 0,
        target: 1,
    })
    .unwrap();

    // Sidebar sees the reorder instantly
    assert!(live.has_changed().unwrap());
    assert_eq!(live.borrow_and_update().clone(), *s.document());

    // Heavy preview has not settled yet
    assert!(!settled.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn teardown_mid_burst_cancels_the_pending_emission() {
    let mut s = session(&["a"]);
    let projector = PreviewProjector::spawn(s.subscribe());
    let mut settled = projector.subscribe();

    edit(&mut s, "doomed");
    advance(Duration::from_millis(100)).await;

    // Closing the editor drops the session and its live sender
    drop(s);
    advance(PREVIEW_DEBOUNCE * 2).await;

    // The pending emission was cancelled, and the settled feed ended
    assert!(!settled.has_changed().unwrap_or(false));
    assert!(
        timeout(Duration::from_millis(10), settled.changed())
            .await
            .expect("channel should close promptly")
            .is_err(),
        "settled sender should be gone after teardown"
    );
}

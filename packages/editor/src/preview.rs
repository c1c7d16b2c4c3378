//! # Debounced preview projector
//!
//! The live document changes on every keystroke and drag; the full page
//! preview is expensive to redraw. The projector derives a second, lagging
//! view that only settles after the input has been quiet for a full
//! window. This is trailing-edge debounce, not throttling: nothing is emitted
//! while changes keep arriving, and the first change is not forwarded
//! eagerly either.
//!
//! One task owns one timer, so two pending emissions can never race. A new
//! value cancels the pending timer and restarts it. The task exits when
//! the session (the live sender) is dropped, and the projector aborts it
//! on drop, so a pending emission can never land in a torn-down editor.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use bandstand_blocks::PageDocument;

/// Quiet window before the preview settles
pub const PREVIEW_DEBOUNCE: Duration = Duration::from_millis(300);

/// Trailing-edge debounce over the session's live document feed
pub struct PreviewProjector {
    settled: watch::Receiver<PageDocument>,
    task: JoinHandle<()>,
}

impl PreviewProjector {
    /// Spawn the projector over a live feed with the default window
    pub fn spawn(live: watch::Receiver<PageDocument>) -> Self {
        Self::spawn_with_window(live, PREVIEW_DEBOUNCE)
    }

    pub fn spawn_with_window(mut live: watch::Receiver<PageDocument>, window: Duration) -> Self {
        let (tx, settled) = watch::channel(live.borrow().clone());

        let task = tokio::spawn(async move {
            loop {
                // Wait for the first change of a burst
                if live.changed().await.is_err() {
                    return;
                }

                // Keep deferring while changes arrive inside the window
                loop {
                    match tokio::time::timeout(window, live.changed()).await {
                        // Another change before the window elapsed
                        Ok(Ok(())) => continue,
                        // Session torn down mid-burst: emit nothing
                        Ok(Err(_)) => return,
                        // Quiet window elapsed
                        Err(_) => break,
                    }
                }

                let document = live.borrow_and_update().clone();
                if tx.send(document).is_err() {
                    return;
                }
            }
        });

        Self { settled, task }
    }

    /// Settled document feed for the heavy preview pane
    pub fn subscribe(&self) -> watch::Receiver<PageDocument> {
        self.settled.clone()
    }
}

impl Drop for PreviewProjector {
    fn drop(&mut self) {
        self.task.abort();
    }
}

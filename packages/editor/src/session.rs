//! # Edit session
//!
//! Per-page editing state machine. One session is constructed when a page
//! is opened for editing and dropped when the editor closes; sessions are
//! never shared, so two open pages can never mix undo histories.
//!
//! Every mutating operation follows the same protocol: apply the mutation
//! (validated, so failures leave the document untouched), push the new
//! document as a history snapshot, and publish it on the live watch
//! channel. The dirty flag is not sticky state; it is the comparison of
//! the current document against the last successfully saved snapshot, so
//! undoing back to the saved state reads clean again.

use tokio::sync::watch;
use tracing::debug;

use bandstand_blocks::{IdGenerator, PageDocument};

use crate::errors::EditorError;
use crate::history::History;
use crate::mutations::{Applied, Mutation};
use crate::store::{PageStore, StoreError};

/// Whether the editor chrome is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    View,
    Edit,
}

/// Editing state for one open page
pub struct EditSession {
    page_id: String,
    mode: EditorMode,
    selected: Option<String>,
    document: PageDocument,
    history: History,
    saved: PageDocument,
    in_flight: Option<PageDocument>,
    ids: IdGenerator,
    live: watch::Sender<PageDocument>,
}

impl EditSession {
    /// Create a session over an already-loaded document
    pub fn new(page_id: impl Into<String>, document: PageDocument) -> Self {
        let page_id = page_id.into();
        let mut ids = IdGenerator::new(&page_id);
        ids.skip_past(document.blocks().iter().map(|b| b.id.as_str()));

        let (live, _) = watch::channel(document.clone());

        Self {
            page_id,
            mode: EditorMode::View,
            selected: None,
            history: History::new(document.clone()),
            saved: document.clone(),
            document,
            in_flight: None,
            ids,
            live,
        }
    }

    /// Open a page through the persistence gateway
    pub fn open(page_id: &str, store: &dyn PageStore) -> Result<Self, EditorError> {
        let document = store.load(page_id)?;
        debug!(page_id, blocks = document.len(), "opened page for editing");
        Ok(Self::new(page_id, document))
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switch view/edit mode
    ///
    /// The session never blocks the transition; confirming a discard of
    /// unsaved changes when leaving edit mode is the UI layer's job.
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            EditorMode::View => EditorMode::Edit,
            EditorMode::Edit => EditorMode::View,
        };
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Set the selection
    ///
    /// An id that is not in the document is permitted; deletion can race a
    /// click, and the render layer treats a dangling id as no selection.
    pub fn select(&mut self, block_id: Option<String>) {
        self.selected = block_id;
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// True iff the current document differs from the last saved snapshot
    pub fn has_unsaved_changes(&self) -> bool {
        self.document != self.saved
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Live (non-debounced) document feed for the block list view
    pub fn subscribe(&self) -> watch::Receiver<PageDocument> {
        self.live.subscribe()
    }

    /// Apply a mutation through the history protocol
    ///
    /// Tolerated no-ops (unknown ids, same-index reorders, empty patches)
    /// record no history entry. Errors leave session state untouched.
    pub fn apply(&mut self, mutation: Mutation) -> Result<Applied, EditorError> {
        let applied = mutation.apply(&mut self.document, &mut self.ids)?;
        if applied == Applied::Noop {
            return Ok(Applied::Noop);
        }

        if let Mutation::Delete { block_id } = &mutation {
            if self.selected.as_deref() == Some(block_id.as_str()) {
                self.selected = None;
            }
        }

        self.history.push(self.document.clone());
        self.live.send_replace(self.document.clone());
        Ok(Applied::Changed)
    }

    /// Step back one history entry; no-op at the oldest retained state
    pub fn undo(&mut self) -> Applied {
        match self.history.undo() {
            Some(snapshot) => {
                self.document = snapshot.clone();
                self.live.send_replace(self.document.clone());
                Applied::Changed
            }
            None => Applied::Noop,
        }
    }

    /// Step forward one history entry; no-op when no redo future exists
    pub fn redo(&mut self) -> Applied {
        match self.history.redo() {
            Some(snapshot) => {
                self.document = snapshot.clone();
                self.live.send_replace(self.document.clone());
                Applied::Changed
            }
            None => Applied::Noop,
        }
    }

    /// Begin a save, returning the snapshot to hand to the gateway
    ///
    /// Rejects a second save while one is in flight; saves are not
    /// cancellable once dispatched.
    pub fn begin_save(&mut self) -> Result<PageDocument, EditorError> {
        if self.in_flight.is_some() {
            return Err(EditorError::SaveInProgress);
        }
        let snapshot = self.document.clone();
        self.in_flight = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Record the gateway's answer for the in-flight save
    ///
    /// On success the in-flight snapshot becomes the saved baseline. On
    /// failure the dirty flag is left as-is and the error is returned for
    /// the UI to surface.
    pub fn complete_save(&mut self, result: Result<(), StoreError>) -> Result<(), EditorError> {
        let snapshot = self.in_flight.take();
        match result {
            Ok(()) => {
                if let Some(snapshot) = snapshot {
                    debug!(page_id = %self.page_id, "save confirmed");
                    self.saved = snapshot;
                }
                Ok(())
            }
            Err(error) => {
                debug!(page_id = %self.page_id, %error, "save failed");
                Err(error.into())
            }
        }
    }

    /// Drive both save phases against a gateway
    pub fn save_to(&mut self, store: &mut dyn PageStore) -> Result<(), EditorError> {
        let snapshot = self.begin_save()?;
        let result = store.save(&self.page_id, &snapshot);
        self.complete_save(result)
    }
}

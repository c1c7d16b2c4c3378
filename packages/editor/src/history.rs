//! # Snapshot history
//!
//! Linear undo/redo log over full document snapshots. Pages are tens of
//! blocks, so whole snapshots stay cheap and keep the log trivially
//! correct; there is no inverse-operation bookkeeping to get wrong.
//!
//! Entry 0 is the state the page was loaded with. Entries before the
//! cursor are undoable past, entries after it are redoable future. A new
//! edit truncates the future (linear undo, not a tree).

use bandstand_blocks::PageDocument;

/// Maximum retained snapshots. When exceeded, the oldest entries are
/// dropped and undo beyond the bound becomes unavailable.
pub const MAX_HISTORY: usize = 100;

/// Bounded snapshot-based undo/redo stack
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<PageDocument>,
    cursor: usize,
    max_entries: usize,
}

impl History {
    /// Create a history seeded with the loaded document
    pub fn new(initial: PageDocument) -> Self {
        Self::with_max_entries(initial, MAX_HISTORY)
    }

    pub fn with_max_entries(initial: PageDocument, max_entries: usize) -> Self {
        debug_assert!(max_entries >= 1);
        Self {
            entries: vec![initial],
            cursor: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// The snapshot at the cursor
    pub fn current(&self) -> &PageDocument {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of retained snapshots; always at least one
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Record a new snapshot after the cursor, discarding any redo future
    pub fn push(&mut self, snapshot: PageDocument) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor += 1;

        while self.entries.len() > self.max_entries {
            self.entries.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step the cursor back, returning the now-active snapshot
    ///
    /// No-op at the oldest retained entry.
    pub fn undo(&mut self) -> Option<&PageDocument> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step the cursor forward, returning the now-active snapshot
    ///
    /// No-op when there is no redo future.
    pub fn redo(&mut self) -> Option<&PageDocument> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }
}

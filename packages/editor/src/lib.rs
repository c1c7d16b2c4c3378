//! # Bandstand Editor
//!
//! Core editing engine for the Bandstand page editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ blocks: typed Block / PageDocument model    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession state machine           │
//! │  - Mutations with validation                │
//! │  - Snapshot-based undo/redo history         │
//! │  - Debounced preview projection             │
//! │  - Drag/keyboard reordering                 │
//! │  - Save/load via the PageStore gateway      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render layer (external): Block → UI         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **One session per open page**: session state (document, history,
//!    selection) is constructed on open and dropped on close, never shared
//! 2. **Every edit is one undo step**: mutations route through the history
//!    protocol; no coalescing of distinct user-visible operations
//! 3. **Fail fast on bad indices, fail soft on missing ids**: stale
//!    indices are caller bugs; id misses are expected races
//! 4. **Dirty means differs-from-saved**: the flag is computed against the
//!    last saved snapshot, so undoing back to it reads clean
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bandstand_editor::{EditSession, Mutation, PreviewProjector};
//!
//! let mut session = EditSession::open("pages/home", &store)?;
//! let preview = PreviewProjector::spawn(session.subscribe());
//!
//! session.apply(Mutation::Delete { block_id })?;
//! session.undo();
//!
//! session.save_to(&mut store)?;
//! ```

mod errors;
mod history;
mod keymap;
mod mutations;
mod preview;
mod reorder;
mod session;
mod store;

pub use errors::EditorError;
pub use history::{History, MAX_HISTORY};
pub use keymap::{EditorAction, Key, KeyCombo, Keymap};
pub use mutations::{Applied, Mutation};
pub use preview::{PreviewProjector, PREVIEW_DEBOUNCE};
pub use reorder::{move_selected_down, move_selected_up, DragReorder};
pub use session::{EditSession, EditorMode};
pub use store::{MemoryStore, PageStore, StoreError};

// Re-export the model types callers always need alongside the session
pub use bandstand_blocks::{Block, BlockKind, BlockProps, BlockTemplate, PageDocument};

//! # Drag-reorder controller
//!
//! Translates a drag gesture into exactly one [`Mutation::Reorder`] on
//! drop. Intermediate hover positions are visual-only state local to the
//! controller; the document is never mutated mid-drag, so a drag is one
//! undo step rather than one per pixel of movement.
//!
//! The keyboard path ([`move_selected_up`] / [`move_selected_down`]) feeds
//! the same mutation, so pointer-only interaction is not the only way to
//! reorder.

use crate::errors::EditorError;
use crate::mutations::{Applied, Mutation};
use crate::session::EditSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    source: usize,
    hover: usize,
}

/// Pointer-drag state for the block list
#[derive(Debug, Default)]
pub struct DragReorder {
    active: Option<Drag>,
}

impl DragReorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Pointer-down on a block handle
    pub fn begin(&mut self, source: usize) {
        self.active = Some(Drag {
            source,
            hover: source,
        });
    }

    /// Pointer-move over a sibling position; visual feedback only
    pub fn hover(&mut self, target: usize) {
        if let Some(drag) = &mut self.active {
            drag.hover = target;
        }
    }

    /// Position the drop indicator should be drawn at, while dragging
    pub fn hover_target(&self) -> Option<usize> {
        self.active.map(|d| d.hover)
    }

    /// Pointer-up: end the drag and emit the move, if any
    ///
    /// Dropping onto the source position is a no-op and yields nothing,
    /// so no history entry is recorded for it.
    pub fn finish(&mut self) -> Option<(usize, usize)> {
        let drag = self.active.take()?;
        (drag.source != drag.hover).then_some((drag.source, drag.hover))
    }

    /// Abandon the drag (e.g. Escape mid-drag)
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Finish the drag and apply the resulting reorder to a session
    pub fn drop_onto(&mut self, session: &mut EditSession) -> Result<Applied, EditorError> {
        match self.finish() {
            Some((source, target)) => session.apply(Mutation::Reorder { source, target }),
            None => Ok(Applied::Noop),
        }
    }
}

/// Move the selected block one position toward the front
pub fn move_selected_up(session: &mut EditSession) -> Result<Applied, EditorError> {
    move_selected(session, -1)
}

/// Move the selected block one position toward the back
pub fn move_selected_down(session: &mut EditSession) -> Result<Applied, EditorError> {
    move_selected(session, 1)
}

fn move_selected(session: &mut EditSession, offset: isize) -> Result<Applied, EditorError> {
    let Some(selected) = session.selected() else {
        return Ok(Applied::Noop);
    };
    let Some(source) = session.document().position(selected) else {
        // Dangling selection; treated like no selection
        return Ok(Applied::Noop);
    };

    let target = source as isize + offset;
    if target < 0 || target as usize >= session.document().len() {
        return Ok(Applied::Noop);
    }

    session.apply(Mutation::Reorder {
        source,
        target: target as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandstand_blocks::{Block, BlockKind, PageDocument};

    fn session(ids: &[&str]) -> EditSession {
        let document = PageDocument::from_blocks(
            ids.iter()
                .map(|id| Block::with_defaults(*id, BlockKind::Hero))
                .collect(),
        )
        .unwrap();
        EditSession::new("pages/home", document)
    }

    fn order(session: &EditSession) -> Vec<&str> {
        session
            .document()
            .blocks()
            .iter()
            .map(|b| b.id.as_str())
            .collect()
    }

    #[test]
    fn test_drag_emits_single_move_on_drop() {
        let mut s = session(&["a", "b", "c", "d"]);
        let mut drag = DragReorder::new();

        drag.begin(0);
        drag.hover(1);
        drag.hover(2);
        assert_eq!(order(&s), vec!["a", "b", "c", "d"]); // untouched mid-drag

        let applied = drag.drop_onto(&mut s).unwrap();
        assert_eq!(applied, Applied::Changed);
        assert_eq!(order(&s), vec!["b", "c", "a", "d"]);
        assert!(s.can_undo());

        // One drag, one undo step
        s.undo();
        assert_eq!(order(&s), vec!["a", "b", "c", "d"]);
        assert!(!s.can_undo());
    }

    #[test]
    fn test_drop_on_source_index_is_noop() {
        let mut s = session(&["a", "b"]);
        let mut drag = DragReorder::new();

        drag.begin(1);
        drag.hover(0);
        drag.hover(1);

        let applied = drag.drop_onto(&mut s).unwrap();
        assert_eq!(applied, Applied::Noop);
        assert!(!s.can_undo());
    }

    #[test]
    fn test_cancel_discards_drag() {
        let mut s = session(&["a", "b"]);
        let mut drag = DragReorder::new();

        drag.begin(0);
        drag.hover(1);
        drag.cancel();

        assert!(!drag.is_dragging());
        assert_eq!(drag.drop_onto(&mut s).unwrap(), Applied::Noop);
    }

    #[test]
    fn test_keyboard_moves_match_pointer_semantics() {
        let mut s = session(&["a", "b", "c"]);
        s.select(Some("b".to_string()));

        move_selected_up(&mut s).unwrap();
        assert_eq!(order(&s), vec!["b", "a", "c"]);

        move_selected_down(&mut s).unwrap();
        move_selected_down(&mut s).unwrap();
        assert_eq!(order(&s), vec!["a", "c", "b"]);

        // At the back edge: no-op, no history entry
        let applied = move_selected_down(&mut s).unwrap();
        assert_eq!(applied, Applied::Noop);
    }

    #[test]
    fn test_keyboard_move_without_selection_is_noop() {
        let mut s = session(&["a", "b"]);
        assert_eq!(move_selected_up(&mut s).unwrap(), Applied::Noop);

        s.select(Some("dangling".to_string()));
        assert_eq!(move_selected_down(&mut s).unwrap(), Applied::Noop);
    }
}

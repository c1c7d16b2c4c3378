//! # Document mutations
//!
//! High-level semantic operations on a page document.
//!
//! ## Design
//!
//! 1. **Intent-preserving**: each mutation is one user-visible operation
//!    and one undo step, never coalesced with another
//! 2. **Validated**: structural constraints are checked before any change,
//!    so a failed mutation leaves the document untouched
//! 3. **Race-tolerant**: lookups by id that miss are no-ops, not errors.
//!    A block deleted elsewhere while an edit was in flight must not
//!    interrupt the user
//!
//! Bad indices are the opposite case: they mean the caller handed us a
//! stale position, and silently clamping them would make a drag-and-drop
//! UI misbehave. Those fail with [`DocumentError::InvalidIndex`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use bandstand_blocks::{BlockTemplate, DocumentError, IdGenerator, PageDocument};

use crate::errors::EditorError;

/// Whether a mutation changed the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The document changed; a history entry was (or must be) recorded
    Changed,
    /// Tolerated no-op; no history entry
    Noop,
}

/// Semantic mutations over the block list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Shallow-merge a props patch into one block
    UpdateProps {
        block_id: String,
        patch: Map<String, Value>,
    },

    /// Relocate the block at `source` to `target` (single-element move)
    Reorder { source: usize, target: usize },

    /// Splice a template's blocks into the document with fresh ids
    ///
    /// `at` defaults to appending at the end. One call is one undo step
    /// regardless of how many blocks the template carries.
    InsertTemplate {
        template: BlockTemplate,
        at: Option<usize>,
    },

    /// Remove the block with an id
    Delete { block_id: String },
}

impl Mutation {
    /// Apply this mutation to a document
    ///
    /// Returns [`Applied::Noop`] for tolerated misses (unknown ids, a
    /// reorder onto the same index). Errors leave the document unchanged.
    pub fn apply(
        &self,
        document: &mut PageDocument,
        ids: &mut IdGenerator,
    ) -> Result<Applied, EditorError> {
        match self {
            Mutation::UpdateProps { block_id, patch } => {
                let Some(block) = document.find_mut(block_id) else {
                    debug!(%block_id, "update targeted a missing block, ignoring");
                    return Ok(Applied::Noop);
                };
                if patch.is_empty() {
                    return Ok(Applied::Noop);
                }
                block.props.merge(patch)?;
                Ok(Applied::Changed)
            }

            Mutation::Reorder { source, target } => {
                if source == target {
                    // Still reject stale indices, even when nothing would move
                    let len = document.len();
                    if *source >= len {
                        return Err(DocumentError::InvalidIndex { index: *source, len }.into());
                    }
                    return Ok(Applied::Noop);
                }
                document.move_block(*source, *target)?;
                Ok(Applied::Changed)
            }

            Mutation::InsertTemplate { template, at } => {
                let index = at.unwrap_or(document.len());
                let blocks = template.instantiate(ids);
                if blocks.is_empty() {
                    return Ok(Applied::Noop);
                }
                let count = blocks.len();
                document.splice_blocks(index, blocks)?;
                debug!(template = %template.name, count, index, "inserted template");
                Ok(Applied::Changed)
            }

            Mutation::Delete { block_id } => {
                if document.remove_block(block_id).is_none() {
                    debug!(%block_id, "delete targeted a missing block, ignoring");
                    return Ok(Applied::Noop);
                }
                Ok(Applied::Changed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandstand_blocks::{Block, BlockKind};
    use serde_json::json;

    fn doc(ids: &[&str]) -> PageDocument {
        PageDocument::from_blocks(
            ids.iter()
                .map(|id| Block::with_defaults(*id, BlockKind::Hero))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_update_props_missing_id_is_noop() {
        let mut document = doc(&["a"]);
        let before = document.clone();
        let mut ids = IdGenerator::new("pages/home");

        let applied = Mutation::UpdateProps {
            block_id: "gone".to_string(),
            patch: json!({ "heading": "x" }).as_object().unwrap().clone(),
        }
        .apply(&mut document, &mut ids)
        .unwrap();

        assert_eq!(applied, Applied::Noop);
        assert_eq!(document, before);
    }

    #[test]
    fn test_reorder_same_index_is_noop_but_stale_index_errors() {
        let mut document = doc(&["a", "b"]);
        let mut ids = IdGenerator::new("pages/home");

        let applied = Mutation::Reorder {
            source: 1,
            target: 1,
        }
        .apply(&mut document, &mut ids)
        .unwrap();
        assert_eq!(applied, Applied::Noop);

        let result = Mutation::Reorder {
            source: 5,
            target: 5,
        }
        .apply(&mut document, &mut ids);
        assert!(matches!(
            result,
            Err(EditorError::Document(DocumentError::InvalidIndex { .. }))
        ));
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut document = doc(&["a"]);
        let mut ids = IdGenerator::new("pages/home");

        let applied = Mutation::Delete {
            block_id: "gone".to_string(),
        }
        .apply(&mut document, &mut ids)
        .unwrap();

        assert_eq!(applied, Applied::Noop);
        assert_eq!(document.len(), 1);
    }

    #[test]
    fn test_mutation_serialization_round_trip() {
        let mutation = Mutation::Reorder {
            source: 0,
            target: 2,
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let back: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, back);
    }
}

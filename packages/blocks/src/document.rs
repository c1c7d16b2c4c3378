//! # Page document
//!
//! The ordered block list composing one page. Order is render order and is
//! significant. The document guarantees structural invariants only: ids are
//! unique, ordering is stable, and inserts never introduce collisions.
//! Everything inside `props` belongs to the per-kind editors.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::block::Block;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("duplicate block id: {0}")]
    DuplicateId(String),

    #[error("index {index} out of range for document of {len} blocks")]
    InvalidIndex { index: usize, len: usize },
}

/// Ordered sequence of blocks for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PageDocument {
    blocks: Vec<Block>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from blocks, rejecting duplicate ids
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, DocumentError> {
        let mut seen = HashSet::new();
        for block in &blocks {
            if !seen.insert(block.id.as_str()) {
                return Err(DocumentError::DuplicateId(block.id.clone()));
            }
        }
        Ok(Self { blocks })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn find(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Position of a block in render order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Append a block, rejecting an id already present
    pub fn push_block(&mut self, block: Block) -> Result<(), DocumentError> {
        self.insert_block(self.blocks.len(), block)
    }

    /// Insert a block at an index in `[0, len]`, rejecting duplicate ids
    pub fn insert_block(&mut self, index: usize, block: Block) -> Result<(), DocumentError> {
        if index > self.blocks.len() {
            return Err(DocumentError::InvalidIndex {
                index,
                len: self.blocks.len(),
            });
        }
        if self.contains(&block.id) {
            return Err(DocumentError::DuplicateId(block.id));
        }
        self.blocks.insert(index, block);
        Ok(())
    }

    /// Remove the block with an id, returning it if present
    pub fn remove_block(&mut self, id: &str) -> Option<Block> {
        let index = self.position(id)?;
        Some(self.blocks.remove(index))
    }

    /// Move a single block from `source` to `target`
    ///
    /// Pure relocation: the block is removed and reinserted, shifting its
    /// neighbors. Both indices must be valid positions in `[0, len)`; out of
    /// range fails without touching the document. Indices are never clamped.
    pub fn move_block(&mut self, source: usize, target: usize) -> Result<(), DocumentError> {
        let len = self.blocks.len();
        for index in [source, target] {
            if index >= len {
                return Err(DocumentError::InvalidIndex { index, len });
            }
        }
        let block = self.blocks.remove(source);
        self.blocks.insert(target, block);
        Ok(())
    }

    /// Splice blocks into the document at an index in `[0, len]`
    ///
    /// Callers are expected to hand in freshly instantiated blocks; ids that
    /// collide with the document or with each other are rejected before any
    /// block is inserted.
    pub fn splice_blocks(
        &mut self,
        index: usize,
        blocks: Vec<Block>,
    ) -> Result<(), DocumentError> {
        if index > self.blocks.len() {
            return Err(DocumentError::InvalidIndex {
                index,
                len: self.blocks.len(),
            });
        }

        let mut seen: HashSet<&str> = self.blocks.iter().map(|b| b.id.as_str()).collect();
        for block in &blocks {
            if !seen.insert(block.id.as_str()) {
                return Err(DocumentError::DuplicateId(block.id.clone()));
            }
        }

        self.blocks.splice(index..index, blocks);
        Ok(())
    }
}

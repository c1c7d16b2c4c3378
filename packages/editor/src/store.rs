//! # Persistence gateway
//!
//! The editor core's boundary to wherever pages live. Saving is a
//! whole-document overwrite, never a diff. The backing service is out of
//! scope; [`MemoryStore`] is the JSON-backed reference implementation used
//! by tests and local tooling.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use bandstand_blocks::{Block, DocumentError, PageDocument};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("page not found: {0}")]
    NotFound(String),

    #[error("stored page {page_id} is corrupt: {reason}")]
    Corrupt { page_id: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load/save boundary for page documents
pub trait PageStore {
    fn load(&self, page_id: &str) -> Result<PageDocument, StoreError>;

    /// Persist the full block sequence, replacing any prior stored state
    fn save(&mut self, page_id: &str, document: &PageDocument) -> Result<(), StoreError>;
}

/// In-memory JSON store
///
/// Decoding is lenient per block: a stored block whose type tag is unknown
/// or whose props no longer fit the typed shape is skipped with a warning
/// instead of failing the whole page. Missing props fields are filled from
/// the kind's defaults during decode.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a page from raw JSON, bypassing the typed model
    ///
    /// Exists so tests and fixtures can exercise the lenient decode path
    /// with payloads the current catalog no longer produces.
    pub fn insert_raw(&mut self, page_id: impl Into<String>, page: Value) {
        self.pages.insert(page_id.into(), page);
    }

    pub fn contains(&self, page_id: &str) -> bool {
        self.pages.contains_key(page_id)
    }
}

impl PageStore for MemoryStore {
    fn load(&self, page_id: &str) -> Result<PageDocument, StoreError> {
        let page = self
            .pages
            .get(page_id)
            .ok_or_else(|| StoreError::NotFound(page_id.to_string()))?;

        let stored_blocks = page
            .get("blocks")
            .and_then(Value::as_array)
            .ok_or_else(|| StoreError::Corrupt {
                page_id: page_id.to_string(),
                reason: "missing blocks array".to_string(),
            })?;

        let mut blocks = Vec::with_capacity(stored_blocks.len());
        for stored in stored_blocks {
            match serde_json::from_value::<Block>(stored.clone()) {
                Ok(block) => blocks.push(block),
                Err(error) => {
                    warn!(page_id, %error, "skipping undecodable stored block");
                }
            }
        }

        PageDocument::from_blocks(blocks).map_err(|error| match error {
            DocumentError::DuplicateId(id) => StoreError::Corrupt {
                page_id: page_id.to_string(),
                reason: format!("duplicate block id {id}"),
            },
            other => StoreError::Corrupt {
                page_id: page_id.to_string(),
                reason: other.to_string(),
            },
        })
    }

    fn save(&mut self, page_id: &str, document: &PageDocument) -> Result<(), StoreError> {
        let page = serde_json::to_value(document).map_err(|error| StoreError::Corrupt {
            page_id: page_id.to_string(),
            reason: error.to_string(),
        })?;
        self.pages.insert(page_id.to_string(), page);
        Ok(())
    }
}

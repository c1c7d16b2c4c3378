//! Error types for the editor core

use thiserror::Error;

use bandstand_blocks::{DocumentError, PropsError};

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum EditorError {
    /// Structural error, including out-of-range indices. These indicate a
    /// caller bug (e.g. a stale index) and fail fast without mutating.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("props error: {0}")]
    Props(#[from] PropsError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("a save is already in flight")]
    SaveInProgress,
}

//! # Bandstand Blocks
//!
//! Block-based page model for the Bandstand site editor.
//!
//! A page is a [`PageDocument`]: an ordered list of typed [`Block`]s. Each
//! block carries a stable unique id, a type tag drawn from a fixed catalog
//! ([`BlockKind`]), and a strongly typed property struct for that kind
//! ([`BlockProps`]). Rendering and persistence live elsewhere; this crate
//! owns the structural invariants: unique ids, stable ordering, and
//! collision-free template insertion.

pub mod block;
pub mod document;
pub mod id_generator;
pub mod props;
pub mod template;

pub use block::{Block, BlockKind};
pub use document::{DocumentError, PageDocument};
pub use id_generator::{page_seed, IdGenerator};
pub use props::{BlockProps, PropsError};
pub use template::{builtin_templates, BlockTemplate};

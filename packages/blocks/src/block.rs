use serde::{Deserialize, Serialize};
use std::fmt;

use crate::props::BlockProps;

/// The fixed catalog of block types the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Hero,
    ServiceCards,
    ProcessSteps,
    #[serde(rename = "FAQ")]
    Faq,
    TeamSection,
    Testimonial,
    #[serde(rename = "CTASection")]
    CtaSection,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Hero => "Hero",
            BlockKind::ServiceCards => "ServiceCards",
            BlockKind::ProcessSteps => "ProcessSteps",
            BlockKind::Faq => "FAQ",
            BlockKind::TeamSection => "TeamSection",
            BlockKind::Testimonial => "Testimonial",
            BlockKind::CtaSection => "CTASection",
        };
        f.write_str(name)
    }
}

/// One content unit on a page
///
/// The id is assigned at creation time, is unique within its document, and
/// is stable for the block's lifetime. Serializes as
/// `{ "id": ..., "type": ..., "props": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(flatten)]
    pub props: BlockProps,
}

impl Block {
    pub fn new(id: impl Into<String>, props: BlockProps) -> Self {
        Self {
            id: id.into(),
            props,
        }
    }

    /// Create a block with default props for a kind
    pub fn with_defaults(id: impl Into<String>, kind: BlockKind) -> Self {
        Self::new(id, BlockProps::default_for(kind))
    }

    pub fn kind(&self) -> BlockKind {
        self.props.kind()
    }
}

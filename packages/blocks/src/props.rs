//! # Typed block properties
//!
//! Each block kind carries its own property struct, joined under the
//! [`BlockProps`] tagged union. The editor core never reaches into these
//! fields; it only asks a variant to shallow-merge a JSON patch into
//! itself, and the variant's typed shape decides whether the patch fits.
//!
//! All structs use `#[serde(default)]` so partially stored props are
//! enriched with type defaults when a page is loaded.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::block::BlockKind;

#[derive(Error, Debug)]
pub enum PropsError {
    #[error("failed to encode {kind} props: {source}")]
    Encode {
        kind: BlockKind,
        source: serde_json::Error,
    },

    #[error("patch does not fit {kind} props: {source}")]
    Shape {
        kind: BlockKind,
        source: serde_json::Error,
    },
}

/// Hero banner at the top of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HeroProps {
    pub heading: String,
    pub subheading: String,
    pub cta_label: String,
    pub cta_target: String,
    pub background_image: Option<String>,
}

/// Grid of service offerings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceCardsProps {
    pub heading: String,
    pub cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Numbered how-it-works steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProcessStepsProps {
    pub heading: String,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

/// FAQ accordion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FaqProps {
    pub heading: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Team member gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TeamSectionProps {
    pub heading: String,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub photo: Option<String>,
}

/// Client quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TestimonialProps {
    pub quote: String,
    pub author: String,
    pub company: String,
}

/// Call-to-action band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CtaSectionProps {
    pub heading: String,
    pub button_label: String,
    pub button_target: String,
}

/// Properties for one block, tagged by block kind
///
/// Serializes as `{ "type": ..., "props": { ... } }`, which the block
/// envelope flattens into its own object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props")]
pub enum BlockProps {
    Hero(HeroProps),
    ServiceCards(ServiceCardsProps),
    ProcessSteps(ProcessStepsProps),
    #[serde(rename = "FAQ")]
    Faq(FaqProps),
    TeamSection(TeamSectionProps),
    Testimonial(TestimonialProps),
    #[serde(rename = "CTASection")]
    CtaSection(CtaSectionProps),
}

impl BlockProps {
    /// The kind tag this variant belongs to
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockProps::Hero(_) => BlockKind::Hero,
            BlockProps::ServiceCards(_) => BlockKind::ServiceCards,
            BlockProps::ProcessSteps(_) => BlockKind::ProcessSteps,
            BlockProps::Faq(_) => BlockKind::Faq,
            BlockProps::TeamSection(_) => BlockKind::TeamSection,
            BlockProps::Testimonial(_) => BlockKind::Testimonial,
            BlockProps::CtaSection(_) => BlockKind::CtaSection,
        }
    }

    /// Default props for a kind
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Hero => BlockProps::Hero(HeroProps::default()),
            BlockKind::ServiceCards => BlockProps::ServiceCards(ServiceCardsProps::default()),
            BlockKind::ProcessSteps => BlockProps::ProcessSteps(ProcessStepsProps::default()),
            BlockKind::Faq => BlockProps::Faq(FaqProps::default()),
            BlockKind::TeamSection => BlockProps::TeamSection(TeamSectionProps::default()),
            BlockKind::Testimonial => BlockProps::Testimonial(TestimonialProps::default()),
            BlockKind::CtaSection => BlockProps::CtaSection(CtaSectionProps::default()),
        }
    }

    /// Shallow-merge a JSON patch into this variant's props
    ///
    /// Keys in the patch overwrite, keys not present are preserved. The
    /// merged object must still fit the variant's typed shape; a patch that
    /// breaks it fails without modifying `self`.
    pub fn merge(&mut self, patch: &Map<String, Value>) -> Result<(), PropsError> {
        match self {
            BlockProps::Hero(p) => *p = merge_typed(p, patch, BlockKind::Hero)?,
            BlockProps::ServiceCards(p) => *p = merge_typed(p, patch, BlockKind::ServiceCards)?,
            BlockProps::ProcessSteps(p) => *p = merge_typed(p, patch, BlockKind::ProcessSteps)?,
            BlockProps::Faq(p) => *p = merge_typed(p, patch, BlockKind::Faq)?,
            BlockProps::TeamSection(p) => *p = merge_typed(p, patch, BlockKind::TeamSection)?,
            BlockProps::Testimonial(p) => *p = merge_typed(p, patch, BlockKind::Testimonial)?,
            BlockProps::CtaSection(p) => *p = merge_typed(p, patch, BlockKind::CtaSection)?,
        }
        Ok(())
    }
}

/// Merge a patch into a typed props struct via its JSON object form
fn merge_typed<T>(current: &T, patch: &Map<String, Value>, kind: BlockKind) -> Result<T, PropsError>
where
    T: Serialize + serde::de::DeserializeOwned,
{
    let mut value = serde_json::to_value(current).map_err(|source| PropsError::Encode {
        kind,
        source,
    })?;

    // Typed props structs always encode as objects
    if let Value::Object(object) = &mut value {
        for (key, patched) in patch {
            object.insert(key.clone(), patched.clone());
        }
    }

    serde_json::from_value(value).map_err(|source| PropsError::Shape { kind, source })
}

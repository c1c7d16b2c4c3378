//! # Block templates
//!
//! A template is a predefined bundle of blocks inserted into a page in one
//! operation. Template blocks carry placeholder ids that are only meaningful
//! inside the bundle; instantiation regenerates every id unconditionally, so
//! a template id can never collide with (or leak into) a document.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::id_generator::IdGenerator;
use crate::props::{
    BlockProps, CtaSectionProps, ServiceCard, ServiceCardsProps, TestimonialProps,
};

/// A named, reusable bundle of blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTemplate {
    pub name: String,
    pub blocks: Vec<Block>,
}

impl BlockTemplate {
    pub fn new(name: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            name: name.into(),
            blocks,
        }
    }

    /// Materialize the template's blocks with fresh ids
    pub fn instantiate(&self, ids: &mut IdGenerator) -> Vec<Block> {
        self.blocks
            .iter()
            .map(|block| Block::new(ids.new_id(), block.props.clone()))
            .collect()
    }
}

/// Starter templates offered by the editor's insert menu
pub fn builtin_templates() -> Vec<BlockTemplate> {
    vec![
        BlockTemplate::new(
            "Services section",
            vec![Block::new(
                "template-services-1",
                BlockProps::ServiceCards(ServiceCardsProps {
                    heading: "What we offer".to_string(),
                    cards: vec![
                        ServiceCard {
                            title: "Live bands".to_string(),
                            description: "Hand-picked acts for corporate events.".to_string(),
                            icon: "music".to_string(),
                        },
                        ServiceCard {
                            title: "DJs".to_string(),
                            description: "From lounge sets to full dance floors.".to_string(),
                            icon: "disc".to_string(),
                        },
                    ],
                }),
            )],
        ),
        BlockTemplate::new(
            "Testimonial band",
            vec![
                Block::new(
                    "template-quote-1",
                    BlockProps::Testimonial(TestimonialProps {
                        quote: "The band made our company party unforgettable.".to_string(),
                        author: "".to_string(),
                        company: "".to_string(),
                    }),
                ),
                Block::new(
                    "template-cta-1",
                    BlockProps::CtaSection(CtaSectionProps {
                        heading: "Ready to book your act?".to_string(),
                        button_label: "Request a quote".to_string(),
                        button_target: "/contact".to_string(),
                    }),
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_regenerates_every_id() {
        let template = &builtin_templates()[1];
        let mut ids = IdGenerator::new("pages/home");

        let blocks = template.instantiate(&mut ids);

        assert_eq!(blocks.len(), 2);
        for (fresh, original) in blocks.iter().zip(&template.blocks) {
            assert_ne!(fresh.id, original.id);
            assert!(fresh.id.starts_with(ids.seed()));
            assert_eq!(fresh.props, original.props);
        }
    }

    #[test]
    fn test_instantiate_twice_never_reuses_ids() {
        let template = &builtin_templates()[0];
        let mut ids = IdGenerator::new("pages/home");

        let first = template.instantiate(&mut ids);
        let second = template.instantiate(&mut ids);

        assert_ne!(first[0].id, second[0].id);
    }
}

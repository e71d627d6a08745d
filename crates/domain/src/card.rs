//! Card classification.
//!
//! Only three card types get special treatment while grouping; everything
//! else is generic and contributes whatever entity ids it references.

use crate::config_node::ConfigNode;
use crate::id::EntityId;

/// Style of a `heading` card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    Title,
    Subtitle,
    /// Any unrecognized style; such headings do nothing.
    Other,
}

impl HeadingStyle {
    fn parse(style: Option<&str>) -> Self {
        match style.filter(|s| !s.is_empty()).map(str::to_lowercase).as_deref() {
            None | Some("title") => Self::Title,
            Some("subtitle") => Self::Subtitle,
            Some(_) => Self::Other,
        }
    }
}

/// A card as seen by the section grouper.
#[derive(Debug, Clone, PartialEq)]
pub enum Card<'a> {
    /// `type: heading`.
    Heading {
        style: HeadingStyle,
        text: Option<&'a str>,
    },
    /// `type: entities`, with its declared, well-formed entity ids.
    EntityList {
        title: Option<&'a str>,
        entities: Vec<EntityId>,
    },
    /// Any other card, `type: entity` included.
    Generic {
        node: &'a ConfigNode,
        single_entity_card: bool,
    },
}

impl<'a> Card<'a> {
    /// Classify a raw card by its (case-insensitive) `type`.
    #[must_use]
    pub fn classify(node: &'a ConfigNode) -> Self {
        match node.kind().as_str() {
            "heading" => Self::Heading {
                style: HeadingStyle::parse(node.text("heading_style")),
                text: node
                    .non_empty_text("heading")
                    .or_else(|| node.non_empty_text("title")),
            },
            "entities" => Self::EntityList {
                title: node
                    .non_empty_text("title")
                    .or_else(|| node.non_empty_text("name")),
                entities: node.items("entities").iter().filter_map(row_entity).collect(),
            },
            kind => Self::Generic {
                node,
                single_entity_card: kind == "entity",
            },
        }
    }
}

/// A row of an entities card: a bare id or a mapping with an `entity` key.
fn row_entity(row: &ConfigNode) -> Option<EntityId> {
    match row {
        ConfigNode::Text(text) => EntityId::parse(text),
        ConfigNode::Mapping(_) => row.text("entity").and_then(EntityId::parse),
        _ => None,
    }
}

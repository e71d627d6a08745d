//! Section grouping: turns a view's flat card list into sections.
//!
//! Cards are scanned left to right while a [`SectionAccumulator`] collects
//! the section in progress:
//!
//! - a title heading closes the open section and starts a new one;
//! - a subtitle heading attaches to the open section unless entities were
//!   already collected, in which case it starts a new one;
//! - a titled entities card is always a section of its own;
//! - untitled cards keep feeding the open section;
//! - a card referencing no entity at all is a separator.

use crate::card::{Card, HeadingStyle};
use crate::config_node::ConfigNode;
use crate::extract::extract_entities;
use crate::id::EntityId;
use crate::registry::DeviceLookup;
use crate::section::{Section, SectionAccumulator};

/// Group `cards` into sections, resolving every entity through `devices`.
#[must_use]
pub fn group_cards<L: DeviceLookup>(cards: &[ConfigNode], devices: &L) -> Vec<Section> {
    cards
        .iter()
        .fold(SectionGrouper::new(devices), |mut grouper, card| {
            grouper.feed(Card::classify(card));
            grouper
        })
        .finish()
}

struct SectionGrouper<'d, L> {
    devices: &'d L,
    current: SectionAccumulator,
    sections: Vec<Section>,
}

impl<'d, L: DeviceLookup> SectionGrouper<'d, L> {
    fn new(devices: &'d L) -> Self {
        Self {
            devices,
            current: SectionAccumulator::new(),
            sections: Vec::new(),
        }
    }

    fn feed(&mut self, card: Card<'_>) {
        match card {
            Card::Heading { style, text } => self.heading(style, text),
            Card::EntityList {
                title: Some(title),
                entities,
            } => {
                self.flush();
                let mut standalone = SectionAccumulator::new();
                append(self.devices, &mut standalone, entities);
                let entities = standalone.flush().map(|s| s.entities).unwrap_or_default();
                self.sections.push(Section::titled(title, entities));
            }
            Card::EntityList {
                title: None,
                entities,
            } => append(self.devices, &mut self.current, entities),
            Card::Generic {
                node,
                single_entity_card,
            } => self.generic(node, single_entity_card),
        }
    }

    fn heading(&mut self, style: HeadingStyle, text: Option<&str>) {
        match style {
            HeadingStyle::Title => {
                self.flush();
                self.current.set_title(text.map(str::to_string));
            }
            HeadingStyle::Subtitle => {
                if self.current.has_entities() {
                    self.flush();
                }
                self.current.set_subtitle(text.map(str::to_string));
            }
            HeadingStyle::Other => {}
        }
    }

    fn generic(&mut self, node: &ConfigNode, single_entity_card: bool) {
        let entities = extract_entities(node);
        if entities.is_empty() {
            self.flush();
            return;
        }
        if single_entity_card && entities.len() == 1 && !self.current.has_open_section() {
            let entities = entities
                .into_iter()
                .map(|entity| self.devices.resolve(entity))
                .collect();
            self.sections.push(Section::untitled(entities));
            return;
        }
        append(self.devices, &mut self.current, entities);
    }

    fn flush(&mut self) {
        if let Some(section) = self.current.flush() {
            self.sections.push(section);
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.sections
    }
}

/// Resolve and append `entities` to `target`, skipping ids it already holds.
fn append<L: DeviceLookup>(
    devices: &L,
    target: &mut SectionAccumulator,
    entities: impl IntoIterator<Item = EntityId>,
) {
    for entity in entities {
        if !target.contains(&entity) {
            target.push(devices.resolve(entity));
        }
    }
}

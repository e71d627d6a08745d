//! Entity reference extraction from arbitrary card configurations.

use std::collections::HashSet;

use crate::config_node::ConfigNode;
use crate::id::EntityId;

/// Distinct entity ids, iterated in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitySet {
    order: Vec<EntityId>,
    seen: HashSet<EntityId>,
}

impl EntitySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entity`; returns `false` when it was already present.
    pub fn insert(&mut self, entity: EntityId) -> bool {
        if self.seen.contains(&entity) {
            return false;
        }
        self.seen.insert(entity.clone());
        self.order.push(entity);
        true
    }

    #[must_use]
    pub fn contains(&self, entity: &EntityId) -> bool {
        self.seen.contains(entity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntityId> {
        self.order.iter()
    }
}

impl IntoIterator for EntitySet {
    type Item = EntityId;
    type IntoIter = std::vec::IntoIter<EntityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntitySet {
    type Item = &'a EntityId;
    type IntoIter = std::slice::Iter<'a, EntityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl FromIterator<EntityId> for EntitySet {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        let mut set = Self::new();
        for entity in iter {
            set.insert(entity);
        }
        set
    }
}

/// Collect every entity id referenced anywhere inside `node`.
///
/// Strings are scanned for embedded ids (templates, markdown, …); an
/// `entity` key must hold a complete id to count. Mappings are walked fully,
/// so ids nested in card-specific sub-structures are still found.
#[must_use]
pub fn extract_entities(node: &ConfigNode) -> EntitySet {
    let mut found = EntitySet::new();
    walk(node, &mut found);
    found
}

fn walk(node: &ConfigNode, found: &mut EntitySet) {
    match node {
        ConfigNode::Text(text) => {
            for entity in EntityId::scan(text) {
                found.insert(entity);
            }
        }
        ConfigNode::Mapping(entries) => {
            if let Some(entity) = node.text("entity").and_then(EntityId::parse) {
                found.insert(entity);
            }
            if let Some(entities) = node.get("entities") {
                walk(entities, found);
            }
            for (_, value) in entries {
                walk(value, found);
            }
        }
        ConfigNode::Sequence(items) => {
            for item in items {
                walk(item, found);
            }
        }
        ConfigNode::Other => {}
    }
}
